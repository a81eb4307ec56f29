//! Prelude module for common imports.
//!
//! ```ignore
//! use richtext_vdom::prelude::*;
//! ```

// Input model
pub use crate::serialized::{LinkFields, LinkType, SerializedDocument, SerializedNode, TextFormat};

// View tree
pub use crate::view::{Children, ElementVariant, HeadingLevel, ListKind, ViewElement, ViewNode};

// Factory
pub use crate::factory::{Slot, VdomFactory, ViewFactory};

// Conversion
pub use crate::convert::{convert_node, Converter, FormatWrapper};

// Document adapter
pub use crate::document::{render, render_html, render_str, DocumentAdapter, Rendered};

// Batch
pub use crate::batch::{render_batch, render_batch_with_config};

// Config
pub use crate::config::{ConvertConfig, HtmlConfig};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Render
pub use crate::render::{to_html, to_html_bytes};

// Error
pub use crate::error::{RichTextError, RichTextResult};
