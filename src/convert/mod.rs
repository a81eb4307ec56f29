//! Node converter: serialized nodes to view descriptors.
//!
//! Conversion is a pure recursive mapping. Each input node yields exactly
//! one [`Slot`]: a single element, a fragment (links), or nothing at all
//! for unsupported kinds and unrecognized tags. Child sequences are mapped
//! slot-for-slot, so empty slots stay at their input positions and the
//! factory decides how to render them.
//!
//! # Flow
//!
//! ```text
//! SerializedNode
//!       │
//!       ▼ Converter::convert()  (recursive over children)
//! Slot<F::Element>
//!       │
//!       ▼ (host mounts the descriptors)
//! ```
//!
//! Nothing here fails. A node that cannot be mapped is dropped, along with
//! its subtree, and its siblings render normally.

mod format;

pub use format::{format_text, FormatWrapper};

use tracing::trace;

use crate::attr::{names, Attrs, AttrsExt};
use crate::config::ConvertConfig;
use crate::factory::{Slot, ViewFactory};
use crate::serialized::{LinkFields, LinkType, SerializedNode};
use crate::view::{HeadingLevel, ListKind};

// =============================================================================
// Converter
// =============================================================================

/// Converts serialized nodes through a view factory.
///
/// Holds only borrowed, read-only state, so one converter can be shared
/// freely and reused for any number of documents.
pub struct Converter<'a, F: ViewFactory> {
    factory: &'a F,
    config: &'a ConvertConfig,
}

impl<'a, F: ViewFactory> Converter<'a, F> {
    pub fn new(factory: &'a F, config: &'a ConvertConfig) -> Self {
        Self { factory, config }
    }

    pub fn factory(&self) -> &'a F {
        self.factory
    }

    pub fn config(&self) -> &'a ConvertConfig {
        self.config
    }

    /// Convert one node and its subtree.
    pub fn convert(&self, node: &SerializedNode) -> Slot<F::Element> {
        match node {
            SerializedNode::Text { text, format } => {
                Slot::Element(format_text(self.factory, self.config, text, *format))
            }

            SerializedNode::Heading { tag, children } => {
                let level = tag
                    .as_deref()
                    .and_then(HeadingLevel::from_tag)
                    .unwrap_or_default();
                Slot::Element(self.factory.heading(level, self.convert_children(children)))
            }

            SerializedNode::Paragraph { children } => {
                Slot::Element(self.factory.paragraph(self.convert_children(children)))
            }

            SerializedNode::Quote { children } => {
                Slot::Element(self.factory.blockquote(self.convert_children(children)))
            }

            SerializedNode::List { tag, children } => {
                match tag.as_deref().and_then(ListKind::from_tag) {
                    Some(ListKind::Ordered) => {
                        Slot::Element(self.factory.ordered_list(self.convert_children(children)))
                    }
                    Some(ListKind::Unordered) => {
                        Slot::Element(self.factory.unordered_list(self.convert_children(children)))
                    }
                    None => {
                        trace!(tag = ?tag, "skipping list with unrecognized tag");
                        Slot::Empty
                    }
                }
            }

            SerializedNode::ListItem { children } => {
                Slot::Element(self.factory.list_item(self.convert_children(children)))
            }

            SerializedNode::HorizontalRule => Slot::Element(self.factory.horizontal_rule()),

            SerializedNode::Link { fields, children } => self.convert_link(fields, children),

            SerializedNode::Unknown { kind } => {
                trace!(kind = %kind, "skipping unsupported node kind");
                Slot::Empty
            }
        }
    }

    /// Map a child sequence slot-for-slot.
    pub fn convert_children(&self, children: &[SerializedNode]) -> Vec<Slot<F::Element>> {
        children.iter().map(|child| self.convert(child)).collect()
    }

    /// Links yield a one-element fragment.
    ///
    /// Custom links always carry a `target`; internal links never do, and
    /// their `newTab` flag is ignored. Any other link type drops the link
    /// and its children.
    fn convert_link(&self, fields: &LinkFields, children: &[SerializedNode]) -> Slot<F::Element> {
        let mut attrs = Attrs::new();
        attrs.set_opt_attr(names::HREF, fields.url.as_deref());

        match fields.link_type {
            LinkType::Custom => {
                attrs.set_attr(names::TARGET, self.config.target_for(fields.new_tab));
            }
            LinkType::Internal => {}
            LinkType::Unrecognized => {
                trace!("skipping link with unrecognized link type");
                return Slot::Empty;
            }
        }

        Slot::Fragment(vec![self.factory.link(attrs, self.convert_children(children))])
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Convert a node with the default configuration.
pub fn convert_node<F: ViewFactory>(node: &SerializedNode, factory: &F) -> Slot<F::Element> {
    let config = ConvertConfig::default();
    Converter::new(factory, &config).convert(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::VdomFactory;
    use crate::serialized::TextFormat;
    use crate::view::{ElementVariant, ViewElement, ViewNode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn convert(node: &SerializedNode) -> Slot<ViewNode> {
        convert_node(node, &VdomFactory)
    }

    fn element(slot: Slot<ViewNode>) -> ViewElement {
        match slot.into_element() {
            Some(ViewNode::Element(e)) => *e,
            other => panic!("expected single element, got {other:?}"),
        }
    }

    fn text(s: &str) -> SerializedNode {
        SerializedNode::text(s, TextFormat::EMPTY)
    }

    #[test]
    fn test_text_without_format_is_bare_leaf() {
        assert_eq!(convert(&text("hi")), Slot::Element(ViewNode::text("hi")));
    }

    #[rstest]
    #[case("h1", HeadingLevel::H1)]
    #[case("h2", HeadingLevel::H2)]
    #[case("h3", HeadingLevel::H3)]
    #[case("h4", HeadingLevel::H4)]
    #[case("h5", HeadingLevel::H5)]
    #[case("h6", HeadingLevel::H6)]
    #[case("h9", HeadingLevel::H1)]
    #[case("title", HeadingLevel::H1)]
    fn test_heading_levels(#[case] tag: &str, #[case] level: HeadingLevel) {
        let elem = element(convert(&SerializedNode::heading(tag, vec![text("T")])));
        assert_eq!(elem.variant, ElementVariant::Heading(level));
        assert_eq!(elem.text_content(), "T");
    }

    #[test]
    fn test_heading_without_tag_falls_back_to_h1() {
        let node = SerializedNode::Heading {
            tag: None,
            children: vec![],
        };
        assert_eq!(element(convert(&node)).variant, ElementVariant::Heading(HeadingLevel::H1));
    }

    #[test]
    fn test_paragraph_and_quote() {
        let para = element(convert(&SerializedNode::paragraph(vec![text("a"), text("b")])));
        assert_eq!(para.variant, ElementVariant::Paragraph);
        assert_eq!(para.slot_count(), 2);

        let quote = element(convert(&SerializedNode::Quote {
            children: vec![text("q")],
        }));
        assert_eq!(quote.variant, ElementVariant::Blockquote);
        assert_eq!(quote.text_content(), "q");
    }

    #[test]
    fn test_unordered_list_keeps_item_order() {
        let node = SerializedNode::list(
            "ul",
            vec![
                SerializedNode::list_item(vec![text("one")]),
                SerializedNode::list_item(vec![text("two")]),
            ],
        );
        let list = element(convert(&node));

        assert_eq!(list.variant, ElementVariant::UnorderedList);
        let items: Vec<_> = list.child_elements().collect();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.variant == ElementVariant::ListItem));
        assert_eq!(items[0].text_content(), "one");
        assert_eq!(items[1].text_content(), "two");
    }

    #[test]
    fn test_ordered_list() {
        let list = element(convert(&SerializedNode::list("ol", vec![])));
        assert_eq!(list.variant, ElementVariant::OrderedList);
    }

    #[test]
    fn test_unrecognized_list_tag_is_empty() {
        let node = SerializedNode::list("dl", vec![SerializedNode::list_item(vec![])]);
        assert_eq!(convert(&node), Slot::Empty);
    }

    #[test]
    fn test_horizontal_rule_has_no_children() {
        let node = SerializedNode::from(&json!({
            "type": "horizontalrule",
            "children": [{ "type": "text", "text": "ignored" }]
        }));
        let rule = element(convert(&node));
        assert_eq!(rule.variant, ElementVariant::HorizontalRule);
        assert!(rule.children.is_empty());
    }

    #[rstest]
    #[case(true, "_blank")]
    #[case(false, "_self")]
    fn test_custom_link_target(#[case] new_tab: bool, #[case] target: &str) {
        let node = SerializedNode::link(LinkFields::custom("https://x", new_tab), vec![text("go")]);
        let slot = convert(&node);

        assert!(matches!(&slot, Slot::Fragment(items) if items.len() == 1));
        let link = element(slot);
        assert_eq!(link.variant, ElementVariant::Link);
        assert_eq!(link.get_attr("href"), Some("https://x"));
        assert_eq!(link.get_attr("target"), Some(target));
        assert_eq!(link.text_content(), "go");
    }

    #[test]
    fn test_internal_link_has_no_target() {
        let mut fields = LinkFields::internal("/docs/intro");
        fields.new_tab = true;
        let link = element(convert(&SerializedNode::link(fields, vec![text("intro")])));

        assert_eq!(link.get_attr("href"), Some("/docs/intro"));
        assert!(!link.has_attr("target"));
    }

    #[test]
    fn test_link_without_url_has_no_href() {
        let fields = LinkFields {
            link_type: LinkType::Custom,
            url: None,
            new_tab: false,
        };
        let link = element(convert(&SerializedNode::link(fields, vec![])));
        assert!(!link.has_attr("href"));
        assert_eq!(link.get_attr("target"), Some("_self"));
    }

    #[test]
    fn test_unrecognized_link_type_drops_children() {
        let node = SerializedNode::link(LinkFields::default(), vec![text("lost")]);
        assert_eq!(convert(&node), Slot::Empty);
    }

    #[test]
    fn test_unknown_kind_leaves_hole_between_siblings() {
        let node = SerializedNode::paragraph(vec![
            text("before"),
            SerializedNode::Unknown {
                kind: "footnote".into(),
            },
            text("after"),
        ]);
        let para = element(convert(&node));

        assert_eq!(para.slot_count(), 3);
        assert_eq!(para.children[1], ViewNode::Empty);
        assert_eq!(para.rendered_count(), 2);
        assert_eq!(para.text_content(), "beforeafter");
    }

    #[test]
    fn test_custom_targets_from_config() {
        let config = ConvertConfig::new().with_targets("new", "same");
        let converter = Converter::new(&VdomFactory, &config);
        let link = element(converter.convert(&SerializedNode::link(
            LinkFields::custom("https://x", true),
            vec![],
        )));
        assert_eq!(link.get_attr("target"), Some("new"));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let node = SerializedNode::from(&json!({
            "type": "quote",
            "children": [
                { "type": "text", "text": "a", "format": 27 },
                { "type": "link", "fields": { "linkType": "custom", "url": "/x", "newTab": true },
                  "children": [{ "type": "text", "text": "b", "format": 16 }] },
                { "type": "mention" }
            ]
        }));

        let first = element(convert(&node));
        let second = element(convert(&node));
        assert_eq!(first, second);
        assert_eq!(
            ViewNode::element(first).fingerprint(),
            ViewNode::element(second).fingerprint()
        );
    }

    /// Host factory producing s-expressions, with a deferred last heading.
    struct SexprFactory;

    impl ViewFactory for SexprFactory {
        type Element = String;

        fn text(&self, content: &str) -> String {
            format!("{content:?}")
        }

        fn element(&self, variant: ElementVariant, attrs: Attrs, children: Vec<Slot<String>>) -> String {
            let mut out = format!("({}", variant.name());
            for (k, v) in attrs {
                out.push_str(&format!(" :{k} {v:?}"));
            }
            for child in children {
                match child {
                    Slot::Empty => out.push_str(" _"),
                    other => other.iter().for_each(|c| {
                        out.push(' ');
                        out.push_str(c);
                    }),
                }
            }
            out.push(')');
            out
        }

        fn heading(&self, level: HeadingLevel, children: Vec<Slot<String>>) -> String {
            let variant = ElementVariant::Heading(level);
            if variant.is_deferred() {
                format!("(lazy {})", self.element(variant, Attrs::new(), children))
            } else {
                self.element(variant, Attrs::new(), children)
            }
        }
    }

    #[test]
    fn test_host_factory_receives_slots() {
        let node = SerializedNode::paragraph(vec![
            SerializedNode::text("a", TextFormat::BOLD | TextFormat::ITALIC),
            SerializedNode::Unknown { kind: "tab".into() },
            SerializedNode::link(LinkFields::internal("/b"), vec![text("b")]),
        ]);

        assert_eq!(
            convert_node(&node, &SexprFactory).into_element().unwrap(),
            r#"(paragraph (italic (bold "a")) _ (link :href "/b" "b"))"#
        );
    }

    #[test]
    fn test_host_factory_overrides_variant() {
        let node = SerializedNode::heading("h6", vec![text("small")]);
        assert_eq!(
            convert_node(&node, &SexprFactory).into_element().unwrap(),
            r#"(lazy (heading-6 "small"))"#
        );
    }
}
