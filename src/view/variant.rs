//! Named element variants exposed by the view layer.

/// Heading level, `h1` through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Parse a serialized heading tag: "h3" → `H3`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Numeric level (1..=6)
    pub fn level(self) -> u8 {
        self as u8 + 1
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// Parse a serialized list tag. Only "ol" and "ul" are recognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ol" => Some(Self::Ordered),
            "ul" => Some(Self::Unordered),
            _ => None,
        }
    }
}

/// The fixed set of building blocks a view factory can materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementVariant {
    /// Top-level wrapper around a whole document
    Container,
    Paragraph,
    Heading(HeadingLevel),
    Blockquote,
    OrderedList,
    UnorderedList,
    ListItem,
    HorizontalRule,
    Link,
    InlineCode,
    Bold,
    Italic,
    Subscript,
    Superscript,
    /// Generic inline container, styled through its `class` attribute
    Inline,
}

impl ElementVariant {
    /// Stable variant name, used in diagnostics and fingerprints.
    pub fn name(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Paragraph => "paragraph",
            Self::Heading(level) => match level {
                HeadingLevel::H1 => "heading-1",
                HeadingLevel::H2 => "heading-2",
                HeadingLevel::H3 => "heading-3",
                HeadingLevel::H4 => "heading-4",
                HeadingLevel::H5 => "heading-5",
                HeadingLevel::H6 => "heading-6",
            },
            Self::Blockquote => "blockquote",
            Self::OrderedList => "ordered-list",
            Self::UnorderedList => "unordered-list",
            Self::ListItem => "list-item",
            Self::HorizontalRule => "horizontal-rule",
            Self::Link => "link",
            Self::InlineCode => "inline-code",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Inline => "inline",
        }
    }

    /// HTML tag the variant renders as.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Container => "div",
            Self::Paragraph => "p",
            Self::Heading(level) => level.tag(),
            Self::Blockquote => "blockquote",
            Self::OrderedList => "ol",
            Self::UnorderedList => "ul",
            Self::ListItem => "li",
            Self::HorizontalRule => "hr",
            Self::Link => "a",
            Self::InlineCode => "code",
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Subscript => "sub",
            Self::Superscript => "sup",
            Self::Inline => "span",
        }
    }

    pub fn list(kind: ListKind) -> Self {
        match kind {
            ListKind::Ordered => Self::OrderedList,
            ListKind::Unordered => Self::UnorderedList,
        }
    }

    /// Self-closing variants never carry children.
    pub fn is_void(self) -> bool {
        matches!(self, Self::HorizontalRule)
    }

    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Link
                | Self::InlineCode
                | Self::Bold
                | Self::Italic
                | Self::Subscript
                | Self::Superscript
                | Self::Inline
        )
    }

    /// Variants a host may supply lazily (only the last heading level).
    pub fn is_deferred(self) -> bool {
        matches!(self, Self::Heading(HeadingLevel::H6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("h1", Some(HeadingLevel::H1))]
    #[case("h4", Some(HeadingLevel::H4))]
    #[case("h6", Some(HeadingLevel::H6))]
    #[case("h9", None)]
    #[case("H2", None)]
    #[case("", None)]
    fn test_heading_level_from_tag(#[case] tag: &str, #[case] expected: Option<HeadingLevel>) {
        assert_eq!(HeadingLevel::from_tag(tag), expected);
    }

    #[test]
    fn test_heading_level_roundtrips_tag() {
        for level in HeadingLevel::ALL {
            assert_eq!(HeadingLevel::from_tag(level.tag()), Some(level));
        }
        assert_eq!(HeadingLevel::H5.level(), 5);
    }

    #[test]
    fn test_list_kind_from_tag() {
        assert_eq!(ListKind::from_tag("ol"), Some(ListKind::Ordered));
        assert_eq!(ListKind::from_tag("ul"), Some(ListKind::Unordered));
        assert_eq!(ListKind::from_tag("dl"), None);
    }

    #[test]
    fn test_variant_properties() {
        assert!(ElementVariant::HorizontalRule.is_void());
        assert!(!ElementVariant::Paragraph.is_void());
        assert!(ElementVariant::Bold.is_inline());
        assert!(!ElementVariant::Blockquote.is_inline());
        assert!(ElementVariant::Heading(HeadingLevel::H6).is_deferred());
        assert!(!ElementVariant::Heading(HeadingLevel::H5).is_deferred());
        assert_eq!(ElementVariant::list(ListKind::Ordered).tag(), "ol");
    }
}
