//! richtext-vdom - Serialized rich-text documents to typed view trees
//!
//! ## Core Concepts
//!
//! **Total conversion**: a document from a rich-text editor (a JSON tree of
//! nodes tagged by `type`) is mapped node-by-node to view descriptors.
//! Unsupported kinds and unrecognized tags produce empty slots instead of
//! errors, so one bad node never stops its siblings from rendering.
//!
//! **Pluggable output**: descriptors are built through the [`ViewFactory`]
//! trait. The built-in [`VdomFactory`] produces [`ViewNode`] trees that can
//! be inspected, fingerprinted or serialized to HTML.
//!
//! ## Modules
//! - `serialized`: input model (`SerializedNode`, `TextFormat`, `LinkFields`)
//! - `view`: built-in output tree (`ViewNode`, `ViewElement`, `ElementVariant`)
//! - `factory`: `ViewFactory` trait, `Slot`, `VdomFactory`
//! - `convert`: node converter and formatting wrappers
//! - `document`: document adapter (`render`, `render_str`)
//! - `render`: HTML serialization
//! - `batch`: rendering many documents (parallel with the `parallel` feature)
//!
//! ## Usage
//!
//! ```ignore
//! use richtext_vdom::{render, Rendered, VdomFactory};
//!
//! let doc: serde_json::Value = serde_json::from_str(stored_json)?;
//! if let Rendered::Container(tree) = render(&doc, &VdomFactory) {
//!     mount(tree);
//! }
//! ```

// =============================================================================
// Core modules
// =============================================================================

#[macro_use]
mod macros;

/// Serialized input model
pub mod serialized;

/// View tree types
pub mod view;

/// View element factory trait and built-in implementation
pub mod factory;

/// Node converter
pub mod convert;

/// Document adapter
pub mod document;

/// HTML rendering
pub mod render;

/// Batch rendering
pub mod batch;

/// Conversion and output configuration
pub mod config;

/// Attribute types
pub mod attr;

/// Deterministic hashing
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Input model
pub use serialized::{LinkFields, LinkType, SerializedDocument, SerializedNode, TextFormat};

// View tree
pub use view::{Children, ElementVariant, HeadingLevel, ListKind, ViewElement, ViewNode};

// Factory
pub use factory::{Slot, VdomFactory, ViewFactory};

// Conversion
pub use convert::{convert_node, format_text, Converter, FormatWrapper};

// Document adapter
pub use document::{render, render_html, render_str, DocumentAdapter, Rendered};

// Batch
pub use batch::{render_batch, render_batch_with_config};

// Config
pub use config::{ConvertConfig, HtmlConfig};

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Hashing
pub use hash::StableHasher;

// Error types
pub use error::{RichTextError, RichTextResult};
