//! Formatting wrappers for text nodes.
//!
//! A text node starts as a plain leaf and is wrapped once per set flag, in
//! the fixed order of [`FormatWrapper::ORDER`]. The order is independent of
//! how the flags were set, so `bold | italic | code` always nests as
//! `code > italic > bold > text`.

use crate::config::ConvertConfig;
use crate::factory::ViewFactory;
use crate::serialized::TextFormat;

/// One formatting wrapper step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWrapper {
    Bold,
    Italic,
    Underline,
    Subscript,
    Superscript,
    Strikethrough,
    Code,
}

impl FormatWrapper {
    /// Application order, innermost first.
    pub const ORDER: [Self; 7] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Subscript,
        Self::Superscript,
        Self::Strikethrough,
        Self::Code,
    ];

    /// Format flag that enables this wrapper
    pub fn flag(self) -> TextFormat {
        match self {
            Self::Bold => TextFormat::BOLD,
            Self::Italic => TextFormat::ITALIC,
            Self::Underline => TextFormat::UNDERLINE,
            Self::Subscript => TextFormat::SUBSCRIPT,
            Self::Superscript => TextFormat::SUPERSCRIPT,
            Self::Strikethrough => TextFormat::STRIKETHROUGH,
            Self::Code => TextFormat::CODE,
        }
    }

    /// Wrap `inner` as the sole child of this wrapper's element.
    ///
    /// Underline and strikethrough use the generic inline container with a
    /// styling class; the others use their named variant.
    pub fn wrap<F: ViewFactory>(
        self,
        factory: &F,
        config: &ConvertConfig,
        inner: F::Element,
    ) -> F::Element {
        match self {
            Self::Bold => factory.bold(inner),
            Self::Italic => factory.italic(inner),
            Self::Underline => factory.styled_inline(&config.underline_class, inner),
            Self::Subscript => factory.subscript(inner),
            Self::Superscript => factory.superscript(inner),
            Self::Strikethrough => factory.styled_inline(&config.strikethrough_class, inner),
            Self::Code => factory.inline_code(inner),
        }
    }

    /// Wrappers enabled by `format`, in application order.
    pub fn active(format: TextFormat) -> impl Iterator<Item = Self> {
        Self::ORDER
            .into_iter()
            .filter(move |wrapper| format.contains(wrapper.flag()))
    }
}

/// Build a formatted text element: a leaf folded through the active wrappers.
pub fn format_text<F: ViewFactory>(
    factory: &F,
    config: &ConvertConfig,
    text: &str,
    format: TextFormat,
) -> F::Element {
    FormatWrapper::active(format).fold(factory.text(text), |inner, wrapper| {
        wrapper.wrap(factory, config, inner)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrsExt;
    use crate::factory::VdomFactory;
    use crate::view::{ElementVariant, ViewNode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Variant chain from outermost wrapper down to the text leaf.
    fn chain(node: &ViewNode) -> Vec<ElementVariant> {
        let mut out = Vec::new();
        let mut current = node;
        while let Some(elem) = current.as_element() {
            out.push(elem.variant);
            assert_eq!(elem.children.len(), 1, "wrappers hold exactly one child");
            current = &elem.children[0];
        }
        assert!(current.is_text());
        out
    }

    #[test]
    fn test_no_flags_is_bare_leaf() {
        let node = format_text(&VdomFactory, &ConvertConfig::default(), "plain", TextFormat::EMPTY);
        assert_eq!(node, ViewNode::text("plain"));
    }

    #[test]
    fn test_unknown_bits_are_ignored() {
        let node = format_text(
            &VdomFactory,
            &ConvertConfig::default(),
            "marked",
            TextFormat::from_bits(128),
        );
        assert_eq!(node, ViewNode::text("marked"));
    }

    #[test]
    fn test_all_flags_nest_in_fixed_order() {
        let all = FormatWrapper::ORDER
            .iter()
            .fold(TextFormat::EMPTY, |acc, w| acc | w.flag());
        let node = format_text(&VdomFactory, &ConvertConfig::default(), "x", all);

        assert_eq!(
            chain(&node),
            vec![
                ElementVariant::InlineCode,
                ElementVariant::Inline,
                ElementVariant::Superscript,
                ElementVariant::Subscript,
                ElementVariant::Inline,
                ElementVariant::Italic,
                ElementVariant::Bold,
            ]
        );
    }

    #[rstest]
    #[case(TextFormat::BOLD | TextFormat::CODE)]
    #[case(TextFormat::CODE | TextFormat::BOLD)]
    fn test_bold_code_order_is_canonical(#[case] format: TextFormat) {
        let node = format_text(&VdomFactory, &ConvertConfig::default(), "x", format);
        assert_eq!(chain(&node), vec![ElementVariant::InlineCode, ElementVariant::Bold]);
    }

    #[test]
    fn test_bold_italic_code() {
        let format = TextFormat::from_bits(1 | 2 | 16);
        let node = format_text(&VdomFactory, &ConvertConfig::default(), "x", format);
        assert_eq!(
            chain(&node),
            vec![ElementVariant::InlineCode, ElementVariant::Italic, ElementVariant::Bold]
        );
    }

    #[rstest]
    #[case(TextFormat::UNDERLINE, "underline")]
    #[case(TextFormat::STRIKETHROUGH, "line-through")]
    fn test_styled_wrappers_use_class(#[case] format: TextFormat, #[case] class: &str) {
        let node = format_text(&VdomFactory, &ConvertConfig::default(), "x", format);
        let elem = node.as_element().unwrap();
        assert_eq!(elem.variant, ElementVariant::Inline);
        assert_eq!(elem.attrs.get_attr("class"), Some(class));
    }

    #[test]
    fn test_custom_classes_from_config() {
        let config = ConvertConfig::new().with_classes("u", "strike");
        let node = format_text(&VdomFactory, &config, "x", TextFormat::UNDERLINE | TextFormat::STRIKETHROUGH);
        let outer = node.as_element().unwrap();
        assert_eq!(outer.attrs.get_attr("class"), Some("strike"));
        let inner = outer.children[0].as_element().unwrap();
        assert_eq!(inner.attrs.get_attr("class"), Some("u"));
    }
}
