//! View tree produced by the built-in factory.
//!
//! `ViewNode` is the descriptor type materialized by
//! [`VdomFactory`](crate::factory::VdomFactory). The converter itself never
//! inspects these values; they are only built, nested and handed to the
//! host (or to [`render`](crate::render) for HTML output).
//!
//! # Slots
//!
//! A child position may be filled by an element, a text leaf, a fragment
//! (several siblings produced by one input node, e.g. a link) or nothing at
//! all. Empty slots are kept so that child positions line up with the input
//! document; they render as nothing.

mod element;
mod variant;

pub use element::{Children, ViewElement};
pub use variant::{ElementVariant, HeadingLevel, ListKind};

use compact_str::CompactString;

use crate::attr::Attrs;
use crate::hash::StableHasher;

/// Node in a view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(Box<ViewElement>),
    /// Plain-text leaf
    Text(CompactString),
    /// Siblings contributed by a single input node
    Fragment(Vec<ViewNode>),
    /// Position of an input node that produced no output
    Empty,
}

impl ViewNode {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Target>
    impl_enum_accessors!(element => ViewElement, text => str);

    /// Create a text leaf
    pub fn text(content: impl Into<CompactString>) -> Self {
        Self::Text(content.into())
    }

    /// Create an element node
    pub fn element(elem: ViewElement) -> Self {
        Self::Element(Box::new(elem))
    }

    /// Check if this slot renders nothing
    pub fn is_empty_slot(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Fragment(items) => items.iter().all(Self::is_empty_slot),
            Self::Element(_) | Self::Text(_) => false,
        }
    }

    /// Get fragment items
    pub fn as_fragment(&self) -> Option<&[ViewNode]> {
        match self {
            Self::Fragment(items) => Some(items),
            _ => None,
        }
    }

    /// Text content of this subtree
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    pub(crate) fn collect_text(&self, buf: &mut String) {
        match self {
            Self::Text(t) => buf.push_str(t),
            Self::Element(e) => {
                for child in &e.children {
                    child.collect_text(buf);
                }
            }
            Self::Fragment(items) => {
                for item in items {
                    item.collect_text(buf);
                }
            }
            Self::Empty => {}
        }
    }

    /// Flatten fragments and drop empty slots into `out`
    pub(crate) fn collect_rendered<'a>(&'a self, out: &mut Vec<&'a ViewNode>) {
        match self {
            Self::Empty => {}
            Self::Fragment(items) => {
                for item in items {
                    item.collect_rendered(out);
                }
            }
            Self::Element(_) | Self::Text(_) => out.push(self),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fingerprint
    // ─────────────────────────────────────────────────────────────────────────

    /// Deterministic structural hash of this subtree.
    ///
    /// Covers variants, attributes, text and slot layout (empty slots
    /// included). Equal trees always hash equal, across processes.
    pub fn fingerprint(&self) -> u64 {
        self.hash_into(StableHasher::new()).finish()
    }

    fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        match self {
            Self::Empty => hasher.update_u8(0),
            Self::Text(t) => hasher.update_u8(1).update_str(t),
            Self::Fragment(items) => items
                .iter()
                .fold(hasher.update_u8(2).update_usize(items.len()), |h, item| {
                    item.hash_into(h)
                }),
            Self::Element(e) => {
                let hasher = hash_attrs(
                    hasher.update_u8(3).update_str(e.variant.name()),
                    &e.attrs,
                )
                .update_usize(e.children.len());
                e.children.iter().fold(hasher, |h, child| child.hash_into(h))
            }
        }
    }
}

fn hash_attrs(hasher: StableHasher, attrs: &Attrs) -> StableHasher {
    attrs
        .iter()
        .fold(hasher.update_usize(attrs.len()), |h, (k, v)| {
            h.update_str(k).update_str(v)
        })
}

impl From<ViewElement> for ViewNode {
    fn from(elem: ViewElement) -> Self {
        Self::element(elem)
    }
}
