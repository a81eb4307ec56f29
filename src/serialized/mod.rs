//! Serialized rich-text input model.
//!
//! The editor stores documents as a JSON tree of nodes tagged by a `type`
//! string. This module decodes that tree into [`SerializedNode`], a sum type
//! with one variant per supported kind and a single [`SerializedNode::Unknown`]
//! variant for everything else.
//!
//! Decoding is total: a node that is not an object, has no `type`, or has
//! mistyped fields still decodes, with the offending fields treated as
//! absent. Nothing here ever returns an error.
//!
//! ```text
//! { "root": { "children": [ { "type": "paragraph", "children": [...] } ] } }
//!            └── SerializedDocument::children ──┘
//! ```

mod format;
mod link;

pub use format::TextFormat;
pub use link::{LinkFields, LinkType};

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// SerializedNode
// =============================================================================

/// One node of the serialized document tree.
///
/// Heading and list tags are kept as the raw strings found in the input so
/// that fallback policy (unknown heading tag, unknown list tag) is decided
/// by the converter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum SerializedNode {
    Text {
        text: String,
        format: TextFormat,
    },
    Paragraph {
        children: Vec<SerializedNode>,
    },
    Heading {
        tag: Option<String>,
        children: Vec<SerializedNode>,
    },
    Quote {
        children: Vec<SerializedNode>,
    },
    List {
        tag: Option<String>,
        children: Vec<SerializedNode>,
    },
    ListItem {
        children: Vec<SerializedNode>,
    },
    /// Never has children, even if the input carried a `children` field
    HorizontalRule,
    Link {
        fields: LinkFields,
        children: Vec<SerializedNode>,
    },
    /// Any kind outside the supported set; `kind` is the raw `type` string
    Unknown {
        kind: String,
    },
}

impl SerializedNode {
    /// Serialized `type` discriminator for this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Quote { .. } => "quote",
            Self::List { .. } => "list",
            Self::ListItem { .. } => "listitem",
            Self::HorizontalRule => "horizontalrule",
            Self::Link { .. } => "link",
            Self::Unknown { kind } => kind.as_str(),
        }
    }

    /// Child nodes, empty for leaf kinds.
    pub fn children(&self) -> &[SerializedNode] {
        match self {
            Self::Paragraph { children }
            | Self::Heading { children, .. }
            | Self::Quote { children }
            | Self::List { children, .. }
            | Self::ListItem { children }
            | Self::Link { children, .. } => children.as_slice(),
            Self::Text { .. } | Self::HorizontalRule | Self::Unknown { .. } => &[],
        }
    }

    /// True for kinds the converter knows how to map.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn text(text: impl Into<String>, format: TextFormat) -> Self {
        Self::Text {
            text: text.into(),
            format,
        }
    }

    pub fn paragraph(children: Vec<SerializedNode>) -> Self {
        Self::Paragraph { children }
    }

    pub fn heading(tag: impl Into<String>, children: Vec<SerializedNode>) -> Self {
        Self::Heading {
            tag: Some(tag.into()),
            children,
        }
    }

    pub fn list(tag: impl Into<String>, children: Vec<SerializedNode>) -> Self {
        Self::List {
            tag: Some(tag.into()),
            children,
        }
    }

    pub fn list_item(children: Vec<SerializedNode>) -> Self {
        Self::ListItem { children }
    }

    pub fn link(fields: LinkFields, children: Vec<SerializedNode>) -> Self {
        Self::Link { fields, children }
    }
}

impl From<&Value> for SerializedNode {
    fn from(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Unknown {
                kind: String::new(),
            };
        };

        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();
        let tag = || obj.get("tag").and_then(Value::as_str).map(str::to_owned);
        let children = || decode_children(obj.get("children"));

        match kind {
            "text" => Self::Text {
                text: obj
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
                format: TextFormat::from_json(obj.get("format")),
            },
            "paragraph" => Self::Paragraph {
                children: children(),
            },
            "heading" => Self::Heading {
                tag: tag(),
                children: children(),
            },
            "quote" => Self::Quote {
                children: children(),
            },
            "list" => Self::List {
                tag: tag(),
                children: children(),
            },
            "listitem" => Self::ListItem {
                children: children(),
            },
            "horizontalrule" => Self::HorizontalRule,
            "link" => Self::Link {
                fields: LinkFields::from_value(obj.get("fields")),
                children: children(),
            },
            other => Self::Unknown {
                kind: other.to_owned(),
            },
        }
    }
}

impl From<Value> for SerializedNode {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Decode a `children` member; anything but an array is an empty sequence.
fn decode_children(value: Option<&Value>) -> Vec<SerializedNode> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(SerializedNode::from).collect())
        .unwrap_or_default()
}

// =============================================================================
// SerializedDocument
// =============================================================================

/// Top-level document: the children of the root node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializedDocument {
    pub children: Vec<SerializedNode>,
}

impl SerializedDocument {
    pub fn new(children: Vec<SerializedNode>) -> Self {
        Self { children }
    }

    /// Shape check and extraction.
    ///
    /// Returns `None` when `value` is not an object. An object without an
    /// object-valued `root`, or whose root has no `children` array, yields a
    /// document with no children.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let children = obj
            .get("root")
            .and_then(Value::as_object)
            .map(|root| decode_children(root.get("children")))
            .unwrap_or_default();
        Some(Self { children })
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
