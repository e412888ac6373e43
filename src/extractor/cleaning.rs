//! Post-extraction cleanup of the output container.
//!
//! Strips presentation and junk from the aggregated article: inline styles,
//! break runs, forms and plugins, duplicate titles, link-heavy headers, and
//! tables/lists/divs that look more like boilerplate than prose.

use dom_query::NodeRef;

use crate::classifier::Classifier;
use crate::dom;
use crate::link_density::{inner_text, link_density};
use crate::patterns::{BR_BEFORE_PARAGRAPH, KILL_BREAKS, VIDEO};
use crate::scoring::comma_segments;

use super::STYLED_CLASS;

/// Temporary marker keeping the top candidate identifiable across markup
/// rewrites, which replace every node under the container.
const TOP_CANDIDATE_MARKER: &str = "data-readability-candidate";

/// Tags judged by [`clean_conditionally`], in order.
const CONDITIONAL_TAGS: [&str; 3] = ["table", "ul", "div"];

/// Comma segments at which an element is taken to be prose and kept.
const PROSE_COMMA_SEGMENTS: usize = 10;

/// List items needed beyond the paragraph count before a div counts as a list.
const LIST_ITEM_BIAS: usize = 100;

/// Headers with more link text than this are navigation.
const HEADER_MAX_LINK_DENSITY: f64 = 0.33;

const MIN_TEXT_LENGTH: usize = 25;
const MIN_EMBED_TEXT_LENGTH: usize = 75;

/// Weight at which an element counts as positively classified.
const STRONG_WEIGHT: i32 = 25;
const WEAK_MAX_LINK_DENSITY: f64 = 0.2;
const STRONG_MAX_LINK_DENSITY: f64 = 0.5;

/// Clean the article container in place.
///
/// `top` is the selected candidate inside `article`; it is never removed by
/// the conditional pass.
pub fn prep_article(article: &NodeRef, top: &NodeRef, classifier: &Classifier) {
    top.set_attr(TOP_CANDIDATE_MARKER, "");

    clean_styles(article);
    kill_breaks(article);

    clean(article, "form");
    clean(article, "object");
    clean(article, "embed");
    clean(article, "h1");

    // A lone h2 is most likely the page title repeated.
    if dom::count_tag(article, "h2") == 1 {
        clean(article, "h2");
    }
    clean(article, "iframe");

    clean_headers(article, classifier);

    for tag in CONDITIONAL_TAGS {
        clean_conditionally(article, tag, classifier);
    }

    remove_empty_paragraphs(article);

    for marked in dom::select_all(article, &format!("[{TOP_CANDIDATE_MARKER}]")) {
        marked.remove_attr(TOP_CANDIDATE_MARKER);
    }

    remove_breaks_before_paragraphs(article);
}

/// Remove `style` attributes from the node and all descendants, except on
/// elements carrying our own styling class.
pub fn clean_styles(node: &NodeRef) {
    let targets = std::iter::once(*node).chain(dom::select_all(node, "[style]"));
    for element in targets {
        if dom::class_name(&element) != STYLED_CLASS {
            element.remove_attr("style");
        }
    }
}

/// Collapse runs of `<br>` (and the whitespace or `&nbsp;` between them)
/// into a single break.
pub fn kill_breaks(node: &NodeRef) {
    let html = dom::inner_html(node);
    if !KILL_BREAKS.is_match(&html) {
        return;
    }
    let collapsed = KILL_BREAKS.replace_all(&html, "<br />");
    dom::set_inner_html(node, &collapsed);
}

/// Remove every descendant `tag` element.
///
/// `object` and `embed` elements pointing at a whitelisted video host stay.
pub fn clean(node: &NodeRef, tag: &str) {
    let is_embed = matches!(tag, "object" | "embed");

    for element in dom::elements_by_tag(node, tag).iter().rev() {
        if is_embed && VIDEO.is_match(&dom::outer_html(element)) {
            continue;
        }
        tracing::trace!(tag, "cleaning element");
        dom::remove(element);
    }
}

/// Remove headings with a negative class weight or mostly link text.
pub fn clean_headers(node: &NodeRef, classifier: &Classifier) {
    for level in 1..=6 {
        let tag = format!("h{level}");
        for header in dom::elements_by_tag(node, &tag).iter().rev() {
            let weight = classifier.weight(&dom::class_name(header), &dom::id(header));
            if weight < 0 || link_density(header) > HEADER_MAX_LINK_DENSITY {
                tracing::trace!(tag = %tag, weight, "removing header");
                dom::remove(header);
            }
        }
    }
}

/// Remove descendant `tag` elements that look like boilerplate.
///
/// Elements are visited in reverse document order, so nested matches are
/// judged before the elements containing them.
pub fn clean_conditionally(node: &NodeRef, tag: &str, classifier: &Classifier) {
    for element in dom::elements_by_tag(node, tag).iter().rev() {
        if element.has_attr(TOP_CANDIDATE_MARKER) {
            continue;
        }
        if let Some(reason) = removal_reason(element, tag, classifier) {
            tracing::trace!(
                tag,
                class = %dom::class_name(element),
                id = %dom::id(element),
                reason,
                "cleaning conditionally"
            );
            dom::remove(element);
        }
    }
}

/// Why `element` should be removed, or `None` to keep it.
///
/// Only embeds whose `src` is off the video whitelist count. After
/// [`clean`] has run, those are left only when another attribute names a
/// video host.
fn removal_reason(element: &NodeRef, tag: &str, classifier: &Classifier) -> Option<&'static str> {
    let weight = classifier.weight(&dom::class_name(element), &dom::id(element));
    if weight < 0 {
        return Some("negative class weight");
    }

    let text = inner_text(element, true);
    if comma_segments(&text) >= PROSE_COMMA_SEGMENTS {
        return None;
    }

    let paragraphs = dom::count_tag(element, "p");
    let images = dom::count_tag(element, "img");
    let list_items = dom::count_tag(element, "li");
    let inputs = dom::count_tag(element, "input");
    let embeds = dom::elements_by_tag(element, "embed")
        .iter()
        .filter(|embed| !embed.attr("src").is_some_and(|src| VIDEO.is_match(&src)))
        .count();
    let density = link_density(element);
    let length = text.chars().count();
    let is_list = matches!(tag, "ul" | "ol");

    if images > paragraphs {
        Some("more images than paragraphs")
    } else if list_items > paragraphs + LIST_ITEM_BIAS && !is_list {
        Some("more list items than paragraphs")
    } else if inputs > paragraphs / 3 {
        Some("too many inputs")
    } else if length < MIN_TEXT_LENGTH && (images == 0 || images > 2) {
        Some("too little text")
    } else if weight < STRONG_WEIGHT && density > WEAK_MAX_LINK_DENSITY {
        Some("link heavy")
    } else if weight >= STRONG_WEIGHT && density > STRONG_MAX_LINK_DENSITY {
        Some("link heavy despite positive weight")
    } else if (embeds == 1 && length < MIN_EMBED_TEXT_LENGTH) || embeds > 1 {
        Some("embed heavy")
    } else {
        None
    }
}

/// Remove paragraphs with no text and no media.
pub fn remove_empty_paragraphs(node: &NodeRef) {
    for paragraph in dom::elements_by_tag(node, "p").iter().rev() {
        let has_media = ["img", "embed", "object"]
            .iter()
            .any(|tag| dom::count_tag(paragraph, tag) > 0);
        if !has_media && inner_text(paragraph, false).is_empty() {
            dom::remove(paragraph);
        }
    }
}

/// Drop a `<br>` that directly precedes a paragraph.
pub fn remove_breaks_before_paragraphs(node: &NodeRef) {
    let html = dom::inner_html(node);
    if !BR_BEFORE_PARAGRAPH.is_match(&html) {
        return;
    }
    let rewritten = BR_BEFORE_PARAGRAPH.replace_all(&html, "<p");
    dom::set_inner_html(node, &rewritten);
}
