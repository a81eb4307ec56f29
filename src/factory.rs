//! View element factory: the capability set the converter builds with.
//!
//! The converter never constructs descriptors itself. It calls a
//! [`ViewFactory`] with a named variant, attributes and child slots, and
//! only ever nests what the factory hands back. Hosts plug in their own UI
//! layer by implementing two methods; [`VdomFactory`] is the built-in
//! implementation producing [`ViewNode`] trees.
//!
//! # Slots
//!
//! Each input child maps to exactly one [`Slot`], so child sequences keep
//! the input's positions. A factory must accept [`Slot::Empty`] entries and
//! render them as nothing.

use crate::attr::{names, Attrs};
use crate::view::{ElementVariant, HeadingLevel, ListKind, ViewElement, ViewNode};

// =============================================================================
// Slot
// =============================================================================

/// Result of converting one input node.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<E> {
    /// The node produced no output
    Empty,
    /// A single descriptor
    Element(E),
    /// A sequence of descriptors standing in one child position
    Fragment(Vec<E>),
}

impl<E> Slot<E> {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Fragment(items) => items.is_empty(),
            Self::Element(_) => false,
        }
    }

    /// Take the single element, if this slot holds exactly one
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(e) => Some(e),
            Self::Fragment(mut items) if items.len() == 1 => items.pop(),
            _ => None,
        }
    }

    /// Iterate the descriptors this slot contributes
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        match self {
            Self::Empty => Default::default(),
            Self::Element(e) => std::slice::from_ref(e).iter(),
            Self::Fragment(items) => items.iter(),
        }
    }

    pub fn map<T>(self, mut f: impl FnMut(E) -> T) -> Slot<T> {
        match self {
            Self::Empty => Slot::Empty,
            Self::Element(e) => Slot::Element(f(e)),
            Self::Fragment(items) => Slot::Fragment(items.into_iter().map(f).collect()),
        }
    }
}

impl<E> From<Option<E>> for Slot<E> {
    fn from(value: Option<E>) -> Self {
        value.map_or(Self::Empty, Self::Element)
    }
}

// =============================================================================
// ViewFactory
// =============================================================================

/// Constructors for every named element variant.
///
/// Implementors provide [`text`](Self::text) and [`element`](Self::element);
/// the per-variant constructors delegate to `element` and can be overridden
/// individually, e.g. to supply the last heading level lazily.
pub trait ViewFactory {
    /// Opaque descriptor produced by this factory
    type Element;

    /// Plain-text leaf
    fn text(&self, content: &str) -> Self::Element;

    /// Any named variant with attributes and child slots
    fn element(
        &self,
        variant: ElementVariant,
        attrs: Attrs,
        children: Vec<Slot<Self::Element>>,
    ) -> Self::Element;

    // ─────────────────────────────────────────────────────────────────────────
    // Block variants
    // ─────────────────────────────────────────────────────────────────────────

    fn container(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::Container, Attrs::new(), children)
    }

    fn paragraph(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::Paragraph, Attrs::new(), children)
    }

    fn heading(&self, level: HeadingLevel, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::Heading(level), Attrs::new(), children)
    }

    fn blockquote(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::Blockquote, Attrs::new(), children)
    }

    fn ordered_list(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::list(ListKind::Ordered), Attrs::new(), children)
    }

    fn unordered_list(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::list(ListKind::Unordered), Attrs::new(), children)
    }

    fn list_item(&self, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::ListItem, Attrs::new(), children)
    }

    fn horizontal_rule(&self) -> Self::Element {
        self.element(ElementVariant::HorizontalRule, Attrs::new(), Vec::new())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inline variants
    // ─────────────────────────────────────────────────────────────────────────

    /// Anchor; `attrs` carries `href` and, for custom links, `target`
    fn link(&self, attrs: Attrs, children: Vec<Slot<Self::Element>>) -> Self::Element {
        self.element(ElementVariant::Link, attrs, children)
    }

    fn inline_code(&self, child: Self::Element) -> Self::Element {
        self.element(ElementVariant::InlineCode, Attrs::new(), vec![Slot::Element(child)])
    }

    fn bold(&self, child: Self::Element) -> Self::Element {
        self.element(ElementVariant::Bold, Attrs::new(), vec![Slot::Element(child)])
    }

    fn italic(&self, child: Self::Element) -> Self::Element {
        self.element(ElementVariant::Italic, Attrs::new(), vec![Slot::Element(child)])
    }

    fn subscript(&self, child: Self::Element) -> Self::Element {
        self.element(ElementVariant::Subscript, Attrs::new(), vec![Slot::Element(child)])
    }

    fn superscript(&self, child: Self::Element) -> Self::Element {
        self.element(ElementVariant::Superscript, Attrs::new(), vec![Slot::Element(child)])
    }

    /// Generic inline container carrying a styling class
    fn styled_inline(&self, class: &str, child: Self::Element) -> Self::Element {
        let attrs = vec![(names::CLASS.to_string(), class.to_string())];
        self.element(ElementVariant::Inline, attrs, vec![Slot::Element(child)])
    }
}

// =============================================================================
// VdomFactory
// =============================================================================

/// Built-in factory producing [`ViewNode`] trees.
///
/// Empty slots become [`ViewNode::Empty`] and multi-element slots become
/// [`ViewNode::Fragment`], so the resulting tree mirrors the input layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct VdomFactory;

impl VdomFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ViewFactory for VdomFactory {
    type Element = ViewNode;

    fn text(&self, content: &str) -> ViewNode {
        ViewNode::text(content)
    }

    fn element(&self, variant: ElementVariant, attrs: Attrs, children: Vec<Slot<ViewNode>>) -> ViewNode {
        let children = if variant.is_void() {
            Vec::new()
        } else {
            children
        };

        ViewElement::new(variant)
            .with_attrs(attrs)
            .with_children(children.into_iter().map(slot_to_node))
            .into()
    }
}

fn slot_to_node(slot: Slot<ViewNode>) -> ViewNode {
    match slot {
        Slot::Empty => ViewNode::Empty,
        Slot::Element(node) => node,
        Slot::Fragment(items) => ViewNode::Fragment(items),
    }
}
