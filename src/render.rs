//! XML text output for assembled [`Element`] trees.
//!
//! Leaf content is wrapped in CDATA and inserted verbatim. CDATA is the only
//! protection against markup characters: text containing `]]>` ends the section
//! early and yields malformed XML. Nothing here escapes that sequence.

use crate::{
    core::{INDENT, RSS_CLOSE, RSS_OPEN, XML_DECLARATION},
    element::Element,
};

/// Renders one element at `indent`, recursing into blocks.
pub fn render_element(element: &Element, indent: &str) -> String {
    let mut out = String::new();
    write_element(&mut out, element, indent);
    out
}

/// Renders the full document: declaration, `rss` root, and one `channel` block
/// holding `head` followed by `items`.
pub fn render_document<'a>(
    head: impl IntoIterator<Item = &'a Element>,
    items: impl IntoIterator<Item = &'a Element>,
) -> String {
    let children: Vec<&Element> = head.into_iter().chain(items).collect();

    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(RSS_OPEN);
    out.push_str("\n\n");
    write_block(&mut out, "channel", children, "");
    out.push('\n');
    out.push_str(RSS_CLOSE);
    out
}

fn write_element(out: &mut String, element: &Element, indent: &str) {
    match element {
        Element::Leaf { tag, text } => write_leaf(out, tag, text, indent),
        Element::Block { tag, children } => write_block(out, tag, children, indent),
    }
}

fn write_leaf(out: &mut String, tag: &str, text: &str, indent: &str) {
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    out.push_str("><![CDATA[");
    out.push_str(text);
    out.push_str("]]></");
    out.push_str(tag);
    out.push_str(">\n");
}

fn write_block<'a>(
    out: &mut String,
    tag: &str,
    children: impl IntoIterator<Item = &'a Element>,
    indent: &str,
) {
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");

    let inner = format!("{indent}{INDENT}");
    for child in children {
        write_element(out, child, &inner);
    }

    out.push_str(indent);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}
