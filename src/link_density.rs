//! Visible text and link density.
//!
//! Link density is the share of an element's visible text that sits inside
//! `<a>` descendants. Boilerplate (menus, tag clouds, "related" boxes) is
//! link-heavy; prose is not.

use crate::dom::{self, NodeRef};
use crate::patterns::NORMALIZE_WHITESPACE;

/// Visible text of a node.
///
/// Trims surrounding whitespace and, when `normalize_spaces` is set, collapses
/// internal runs of two or more whitespace characters into one space.
#[must_use]
pub fn inner_text(node: &NodeRef, normalize_spaces: bool) -> String {
    let text = dom::text_content(node);
    let trimmed = text.trim();
    if normalize_spaces {
        NORMALIZE_WHITESPACE.replace_all(trimmed, " ").into_owned()
    } else {
        trimmed.to_string()
    }
}

/// Length in characters of the node's normalized visible text.
#[inline]
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    inner_text(node, true).chars().count()
}

/// Link text length divided by total text length, in `[0, 1]`.
///
/// A node without visible text has density 0.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let total = text_length(node);
    if total == 0 {
        return 0.0;
    }

    let link_length: usize = dom::elements_by_tag(node, "a")
        .iter()
        .map(text_length)
        .sum();

    (link_length as f64 / total as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, select_first};

    #[test]
    fn inner_text_trims_and_collapses() {
        let doc = parse("<p>  Hello \n\n  <b>big</b>   world  </p>");
        let p = select_first(&doc, "p").unwrap();

        assert_eq!(inner_text(&p, true), "Hello big world");
        assert_eq!(inner_text(&p, false), "Hello \n\n  big   world");
    }

    #[test]
    fn text_length_counts_chars_not_bytes() {
        let doc = parse("<p>café</p>");
        let p = select_first(&doc, "p").unwrap();
        assert_eq!(text_length(&p), 4);
    }

    #[test]
    fn density_of_empty_node_is_zero() {
        let doc = parse("<div><a href='/'></a></div>");
        let div = select_first(&doc, "div").unwrap();

        let density = link_density(&div);
        assert_eq!(density, 0.0);
        assert!(!density.is_nan());
    }

    #[test]
    fn density_without_links_is_zero() {
        let doc = parse("<p>Plain prose, nothing linked.</p>");
        let p = select_first(&doc, "p").unwrap();
        assert_eq!(link_density(&p), 0.0);
    }

    #[test]
    fn density_is_link_share_of_text() {
        // "read more" = 9 chars of "Text here read more" = 19 chars
        let doc = parse("<p>Text here <a href='/x'>read more</a></p>");
        let p = select_first(&doc, "p").unwrap();

        let density = link_density(&p);
        assert!((density - 9.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn density_of_all_links_is_one() {
        let doc = parse("<ul><li><a href='/a'>Home</a></li><li><a href='/b'>About</a></li></ul>");
        let ul = select_first(&doc, "ul").unwrap();
        assert_eq!(link_density(&ul), 1.0);
    }
}
