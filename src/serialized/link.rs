//! Link payload: the `fields` object of a serialized link node.

use serde_json::Value;

/// How a link's destination is expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkType {
    /// Free-form URL entered by the author
    Custom,
    /// Reference to another document in the content store
    Internal,
    /// Anything else, including an absent `linkType` (kept for diagnostics)
    #[default]
    Unrecognized,
}

impl LinkType {
    /// Parse the serialized `linkType` value.
    pub fn from_str_opt(value: Option<&str>) -> Self {
        match value {
            Some("custom") => Self::Custom,
            Some("internal") => Self::Internal,
            _ => Self::Unrecognized,
        }
    }
}

/// Link-specific fields actually used by the converter.
///
/// Every other field of the payload (`doc`, relation data, ids) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkFields {
    pub link_type: LinkType,
    pub url: Option<String>,
    pub new_tab: bool,
}

impl LinkFields {
    pub fn custom(url: impl Into<String>, new_tab: bool) -> Self {
        Self {
            link_type: LinkType::Custom,
            url: Some(url.into()),
            new_tab,
        }
    }

    pub fn internal(url: impl Into<String>) -> Self {
        Self {
            link_type: LinkType::Internal,
            url: Some(url.into()),
            new_tab: false,
        }
    }

    /// Decode from the node's `fields` value.
    ///
    /// Missing or mistyped members are treated as absent.
    pub fn from_value(fields: Option<&Value>) -> Self {
        let Some(fields) = fields.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            link_type: LinkType::from_str_opt(fields.get("linkType").and_then(Value::as_str)),
            url: fields.get("url").and_then(Value::as_str).map(str::to_owned),
            new_tab: fields.get("newTab").and_then(Value::as_bool).unwrap_or(false),
        }
    }
}
