//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` giving the pipeline the tree primitives it
//! needs: attribute access, document-order walking that tolerates removal,
//! descendant snapshots by tag, and move/replace/remove.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Lowercase tag name, or an empty string for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|name| name.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check the element's tag name.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && tag_name(node) == tag
}

/// `class` attribute, empty when absent.
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    node.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// `id` attribute, empty when absent.
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> String {
    node.attr("id").map(|s| s.to_string()).unwrap_or_default()
}

// === Text Content ===

/// Concatenated text of all descendant text nodes.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Serialized children of the node.
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    node.inner_html()
}

/// Serialized node including its own tags.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

// === Tree Navigation ===

/// Parent, only when it is an element (not the document node).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// First child that is an element.
#[must_use]
pub fn first_element_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_element() {
            return Some(c);
        }
        child = c.next_sibling();
    }
    None
}

/// Next sibling that is an element (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Element children in order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Next element in document order, not descending into `node`.
///
/// Compute this before removing `node`: it is where a walk resumes once the
/// subtree is gone.
#[must_use]
pub fn next_element_after_subtree<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = *node;
    loop {
        if let Some(sibling) = next_element_sibling(&current) {
            return Some(sibling);
        }
        current = current.parent()?;
    }
}

/// Next element in document order (pre-order), descending first.
#[must_use]
pub fn next_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    first_element_child(node).or_else(|| next_element_after_subtree(node))
}

// === Querying ===

/// Snapshot of all descendant elements matching a CSS selector, in document
/// order.
///
/// The node itself is not included. The snapshot is detached from later
/// mutations: removing one entry does not shift the others.
#[must_use]
pub fn select_all<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().to_vec()
}

/// Snapshot of all descendant elements with the given tag.
#[inline]
#[must_use]
pub fn elements_by_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    select_all(node, tag)
}

/// Number of descendant elements with the given tag.
#[inline]
#[must_use]
pub fn count_tag(node: &NodeRef, tag: &str) -> usize {
    Selection::from(*node).select(tag).length()
}

// === Tree Manipulation ===

/// Create a detached element in the same tree as `anchor`.
#[inline]
#[must_use]
pub fn create_element<'a>(anchor: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    anchor.tree.new_element(tag)
}

/// Detach a node (and its subtree) from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Move `child` from wherever it is to the end of `parent`'s children.
pub fn move_into(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(child);
}

/// Move every child node (text included) of `from` into `to`, in order.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    for child in from.children() {
        move_into(to, &child);
    }
}

/// Replace `old` in its parent with a fresh element of tag `tag` that takes
/// over `old`'s children. Attributes are not carried over.
///
/// Returns `None`, leaving the tree untouched, when `old` has no parent.
pub fn replace_with_new_element<'a>(old: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    old.parent()?;
    let replacement = create_element(old, tag);
    move_children(old, &replacement);
    old.replace_with(&replacement);
    Some(replacement)
}

/// Replace the node's children with parsed markup.
#[inline]
pub fn set_inner_html(node: &NodeRef, html: &str) {
    node.set_html(html);
}

/// Rename the element, keeping attributes and children.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    node.rename(new_tag);
}

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First element matching `selector` anywhere in the document.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select_single(selector).nodes().first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        select_first(doc, selector).unwrap()
    }

    #[test]
    fn test_attribute_accessors() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = first(&doc, "div");

        assert_eq!(tag_name(&div), "div");
        assert_eq!(id(&div), "main");
        assert_eq!(class_name(&div), "container");
        assert!(is_tag(&div, "div"));
    }

    #[test]
    fn test_missing_attributes_are_empty() {
        let doc = parse("<div>no attributes</div>");
        let div = first(&doc, "div");

        assert_eq!(id(&div), "");
        assert_eq!(class_name(&div), "");
    }

    #[test]
    fn test_document_order_walk() {
        let doc = parse("<div id=a><p id=b>x</p>text<p id=c><span id=d></span></p></div><p id=e></p>");
        let mut seen = Vec::new();
        let mut cursor = next_element(&first(&doc, "#a"));
        while let Some(node) = cursor {
            seen.push(id(&node));
            cursor = next_element(&node);
        }
        assert_eq!(seen, vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn test_walk_resumes_after_removed_subtree() {
        let doc = parse("<div><section id=gone><p id=inner>x</p></section><p id=next>y</p></div>");
        let gone = first(&doc, "#gone");

        let resume = next_element_after_subtree(&gone).unwrap();
        remove(&gone);

        assert_eq!(id(&resume), "next");
        assert!(doc.select("#inner").is_empty());
    }

    #[test]
    fn test_elements_by_tag_is_a_snapshot() {
        let doc = parse("<div><p>1</p><p>2</p><p>3</p></div>");
        let div = first(&doc, "div");
        let paragraphs = elements_by_tag(&div, "p");

        remove(&paragraphs[0]);

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(text_content(&paragraphs[1]), "2".into());
        assert_eq!(count_tag(&div, "p"), 2);
    }

    #[test]
    fn test_elements_by_tag_excludes_self() {
        let doc = parse("<div id=outer><div id=inner></div></div>");
        let outer = first(&doc, "#outer");
        let divs = elements_by_tag(&outer, "div");

        assert_eq!(divs.len(), 1);
        assert_eq!(id(&divs[0]), "inner");
    }

    #[test]
    fn test_move_into_reparents() {
        let doc = parse("<div id=a><p id=x>moved</p></div><div id=b></div>");
        let x = first(&doc, "#x");
        let b = first(&doc, "#b");

        move_into(&b, &x);

        assert!(doc.select("#a > #x").is_empty());
        assert!(doc.select("#b > #x").exists());
    }

    #[test]
    fn test_replace_with_new_element_keeps_children() {
        let doc = parse(r#"<section><div class="c">text <b>bold</b></div></section>"#);
        let div = first(&doc, "div");

        let p = replace_with_new_element(&div, "p").unwrap();

        assert_eq!(tag_name(&p), "p");
        assert!(doc.select("section > div").is_empty());
        assert_eq!(inner_html(&first(&doc, "section")), "<p>text <b>bold</b></p>".into());
    }

    #[test]
    fn test_replace_detached_element_fails_softly() {
        let doc = parse("<body></body>");
        let orphan = create_element(&first(&doc, "body"), "div");

        assert!(replace_with_new_element(&orphan, "p").is_none());
    }

    #[test]
    fn test_parent_element_stops_at_document() {
        let doc = parse("<html><body></body></html>");
        let html = first(&doc, "html");

        assert!(parent_element(&html).is_none());
        assert_eq!(tag_name(&parent_element(&first(&doc, "body")).unwrap()), "html");
    }
}
