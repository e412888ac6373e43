//! Document preparation before scoring.
//!
//! Guarantees a body, drops scripts and styles, disables foreign stylesheets,
//! turns `<br><br>` runs into paragraph breaks and `<font>` into `<span>`.
//!
//! Frame documents are processed as given: choosing the largest frame needs
//! rendered sizes and the frame's own document, neither of which exists here.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::patterns::REPLACE_BRS;

use super::OWN_STYLESHEET_MARKER;

/// Elements that never carry readable content.
const NON_CONTENT_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Prepare the document in place and return its body.
pub fn prep_document(doc: &Document) -> NodeRef<'_> {
    let body = ensure_body(doc);

    remove_non_content(doc);
    disable_stylesheets(doc);
    replace_breaks(&body);
    replace_fonts(&body);

    body
}

/// Return the document body, creating an empty one if the parser produced
/// none (frameset documents, for instance).
pub fn ensure_body(doc: &Document) -> NodeRef<'_> {
    if let Some(body) = dom::select_first(doc, "body") {
        return body;
    }

    let root = dom::select_first(doc, "html").unwrap_or_else(|| doc.root());
    let body = doc.tree.new_element("body");
    root.append_child(&body);
    tracing::debug!("document had no body; created an empty one");
    body
}

/// Remove every script, style and noscript element.
pub fn remove_non_content(doc: &Document) {
    for tag in NON_CONTENT_TAGS {
        for node in doc.select(tag).nodes() {
            dom::remove(node);
        }
    }
}

/// Mark linked stylesheets as disabled unless they are our own.
pub fn disable_stylesheets(doc: &Document) {
    for link in doc.select("link[href]").nodes() {
        let is_stylesheet = link
            .attr("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("stylesheet"));
        let is_own = link
            .attr("href")
            .is_some_and(|href| href.contains(OWN_STYLESHEET_MARKER));

        if is_stylesheet && !is_own {
            link.set_attr("disabled", "");
        }
    }
}

/// Rewrite runs of two or more `<br>` into a paragraph boundary.
pub fn replace_breaks(body: &NodeRef) {
    let html = dom::inner_html(body);
    if !REPLACE_BRS.is_match(&html) {
        return;
    }
    let rewritten = REPLACE_BRS.replace_all(&html, "</p><p>");
    dom::set_inner_html(body, &rewritten);
}

/// Rename legacy `<font>` wrappers to `<span>`, keeping their attributes.
pub fn replace_fonts(body: &NodeRef) {
    for font in dom::elements_by_tag(body, "font") {
        dom::rename(&font, "span");
    }
}
