//! HTML rendering for view trees
//!
//! Serializes [`ViewNode`] trees built by the
//! [`VdomFactory`](crate::factory::VdomFactory) to HTML strings. Empty
//! slots render nothing; fragments render their items in order.

use crate::attr::Attrs;
use crate::config::HtmlConfig;
use crate::view::{ViewElement, ViewNode};

// =============================================================================
// Rendering
// =============================================================================

/// Render a view tree to an HTML string.
pub fn to_html(node: &ViewNode, config: &HtmlConfig) -> String {
    let mut output = String::new();
    render_node(node, config, &mut output);
    output
}

/// Render a view tree to HTML bytes.
pub fn to_html_bytes(node: &ViewNode, config: &HtmlConfig) -> Vec<u8> {
    to_html(node, config).into_bytes()
}

/// Render a node to HTML.
fn render_node(node: &ViewNode, config: &HtmlConfig, output: &mut String) {
    match node {
        ViewNode::Element(elem) => render_element(elem, config, output),
        ViewNode::Text(text) => {
            if config.wrap_text_leaves {
                output.push_str("<span>");
                escape_html_into(text, output);
                output.push_str("</span>");
            } else {
                escape_html_into(text, output);
            }
        }
        ViewNode::Fragment(items) => {
            for item in items {
                render_node(item, config, output);
            }
        }
        ViewNode::Empty => {}
    }
}

/// Render an element to HTML.
fn render_element(elem: &ViewElement, config: &HtmlConfig, output: &mut String) {
    let tag = elem.variant.tag();
    output.push('<');
    output.push_str(tag);

    render_attrs(&elem.attrs, output);

    // Void elements
    if elem.variant.is_void() {
        output.push_str(if config.void_self_closing { " />" } else { ">" });
        return;
    }

    output.push('>');

    for child in &elem.children {
        render_node(child, config, output);
    }

    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        escape_attr_into(value, output);
        output.push('"');
    }
}

/// Escape HTML special characters.
fn escape_html_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value special characters.
fn escape_attr_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrsExt;
    use crate::view::{ElementVariant, HeadingLevel};

    fn el(variant: ElementVariant, children: impl IntoIterator<Item = ViewNode>) -> ViewNode {
        ViewElement::new(variant).with_children(children).into()
    }

    #[test]
    fn test_render_simple_element() {
        let node = el(ElementVariant::Heading(HeadingLevel::H2), [ViewNode::text("Title")]);
        assert_eq!(to_html(&node, &HtmlConfig::default()), "<h2><span>Title</span></h2>");
        assert_eq!(to_html(&node, &HtmlConfig::COMPACT), "<h2>Title</h2>");
    }

    #[test]
    fn test_render_void_element() {
        let node = el(ElementVariant::HorizontalRule, []);
        assert_eq!(to_html(&node, &HtmlConfig::default()), "<hr />");
        assert_eq!(to_html(&node, &HtmlConfig::COMPACT), "<hr>");
    }

    #[test]
    fn test_render_skips_empty_and_flattens_fragments() {
        let node = el(
            ElementVariant::Paragraph,
            [
                ViewNode::Empty,
                ViewNode::Fragment(vec![ViewNode::text("a"), ViewNode::text("b")]),
            ],
        );
        assert_eq!(to_html(&node, &HtmlConfig::COMPACT), "<p>ab</p>");
    }

    #[test]
    fn test_render_escapes_attrs_and_text() {
        let mut attrs = Attrs::new();
        attrs.set_attr("href", "/q?a=1&b=\"2\"");
        let node: ViewNode = ViewElement::new(ElementVariant::Link)
            .with_attrs(attrs)
            .with_children([ViewNode::text("<b> & co")])
            .into();

        assert_eq!(
            to_html(&node, &HtmlConfig::COMPACT),
            r#"<a href="/q?a=1&amp;b=&quot;2&quot;">&lt;b&gt; &amp; co</a>"#
        );
    }

    #[test]
    fn test_render_bytes() {
        let node = ViewNode::text("x");
        assert_eq!(to_html_bytes(&node, &HtmlConfig::COMPACT), b"x".to_vec());
    }
}
