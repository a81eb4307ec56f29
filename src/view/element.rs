//! Element type - a named variant with attributes and child slots
//!
//! The core building block of the view tree.

use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{ElementVariant, ViewNode};

/// Child slots of an element. Empty slots keep their position.
pub type Children = SmallVec<[ViewNode; 4]>;

// =============================================================================
// ViewElement
// =============================================================================

/// View element: variant, attributes and ordered child slots
#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    /// Named element variant
    pub variant: ElementVariant,
    /// Element attributes, in insertion order
    pub attrs: Attrs,
    /// Child slots, including empty ones
    pub children: Children,
}

impl ViewElement {
    /// Create an element with no attributes and no children
    pub fn new(variant: ElementVariant) -> Self {
        Self {
            variant,
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Child queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of child slots, empty slots included
    pub fn slot_count(&self) -> usize {
        self.children.len()
    }

    /// Children as they render: fragments flattened, empty slots dropped
    pub fn rendered_children(&self) -> Vec<&ViewNode> {
        let mut out = Vec::with_capacity(self.children.len());
        for child in &self.children {
            child.collect_rendered(&mut out);
        }
        out
    }

    /// Number of children that render to something
    pub fn rendered_count(&self) -> usize {
        self.rendered_children().len()
    }

    /// Rendered child elements (text leaves excluded)
    pub fn child_elements(&self) -> impl Iterator<Item = &ViewElement> {
        self.rendered_children()
            .into_iter()
            .filter_map(ViewNode::as_element)
    }

    /// Check if element renders no children
    pub fn is_empty(&self) -> bool {
        self.rendered_count() == 0
    }

    /// Text content of this element (concatenated from all text leaves)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            child.collect_text(&mut result);
        }
        result
    }
}
