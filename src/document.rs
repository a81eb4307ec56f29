//! Document adapter: the entry point from a stored document to a view tree.
//!
//! Documents come from a loosely-typed content store and may be missing or
//! half-written while authoring. The adapter therefore never fails on shape:
//!
//! | Input | Result |
//! |-------|--------|
//! | not an object (`null`, string, number, array) | [`Rendered::Blank`] |
//! | object without an object `root` | container with no children |
//! | `{ "root": { "children": [...] } }` | container with one slot per child |
//!
//! Only [`render_str`] can return an error, and only for text that is not
//! JSON at all.

use serde_json::Value;
use tracing::debug;

use crate::config::{ConvertConfig, HtmlConfig};
use crate::convert::Converter;
use crate::error::RichTextResult;
use crate::factory::{ViewFactory, VdomFactory};
use crate::render::to_html;
use crate::serialized::SerializedDocument;

// =============================================================================
// Rendered
// =============================================================================

/// Output of rendering one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<E> {
    /// Input was not an object; nothing to mount
    Blank,
    /// Container wrapping the converted top-level nodes
    Container(E),
}

impl<E> Rendered<E> {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn container(&self) -> Option<&E> {
        match self {
            Self::Container(e) => Some(e),
            Self::Blank => None,
        }
    }

    pub fn into_container(self) -> Option<E> {
        match self {
            Self::Container(e) => Some(e),
            Self::Blank => None,
        }
    }
}

// =============================================================================
// DocumentAdapter
// =============================================================================

/// Renders whole documents through a view factory.
pub struct DocumentAdapter<'a, F: ViewFactory> {
    converter: Converter<'a, F>,
}

impl<'a, F: ViewFactory> DocumentAdapter<'a, F> {
    pub fn new(factory: &'a F, config: &'a ConvertConfig) -> Self {
        Self {
            converter: Converter::new(factory, config),
        }
    }

    /// Shape-check `document` and render it.
    pub fn render(&self, document: &Value) -> Rendered<F::Element> {
        match SerializedDocument::from_value(document) {
            Some(doc) => Rendered::Container(self.render_document(&doc)),
            None => {
                debug!(kind = json_kind(document), "document is not an object, rendering blank");
                Rendered::Blank
            }
        }
    }

    /// Render an already-decoded document into its container.
    pub fn render_document(&self, document: &SerializedDocument) -> F::Element {
        let children = self.converter.convert_children(&document.children);
        self.converter.factory().container(children)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Render a document value with the default configuration.
pub fn render<F: ViewFactory>(document: &Value, factory: &F) -> Rendered<F::Element> {
    let config = ConvertConfig::default();
    DocumentAdapter::new(factory, &config).render(document)
}

/// Parse JSON text and render it.
///
/// Fails only when `json` is not valid JSON; any well-formed value renders.
pub fn render_str<F: ViewFactory>(json: &str, factory: &F) -> RichTextResult<Rendered<F::Element>> {
    let document: Value = serde_json::from_str(json)?;
    Ok(render(&document, factory))
}

/// Render a document value straight to HTML with the built-in factory.
///
/// A blank result is the empty string.
pub fn render_html(document: &Value) -> String {
    match render(document, &VdomFactory) {
        Rendered::Container(node) => to_html(&node, &HtmlConfig::default()),
        Rendered::Blank => String::new(),
    }
}
