// 🌳 XML access helpers
//
// Thin wrappers over roxmltree that mirror how the source documents are read:
// "first descendant named X", "its text", "direct child named X".

use roxmltree::{Document, Node};

/// Parse a document from its text
pub fn parse(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    Document::parse(text)
}

/// First descendant element (excluding `node` itself) with the given tag
pub fn find<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

/// All descendant elements (excluding `node` itself) with the given tag, in document order
pub fn find_all<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// Text of the first descendant with the given tag
///
/// `None` when the element is absent, `Some("")` when present but empty.
pub fn find_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find(node, tag).map(text_of)
}

/// Text of the first direct child with the given tag
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(tag))
        .map(text_of)
}

/// Element children in document order
pub fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Element text, or "" if it has none
pub fn text_of(node: Node<'_, '_>) -> String {
    node.text().unwrap_or("").to_string()
}

/// Some(value) only when the text is present and not blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
