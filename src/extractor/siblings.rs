//! Sibling aggregation.
//!
//! Articles are often split across siblings of the best candidate (a lead
//! paragraph before it, content resumed after an ad). Siblings that score
//! well or read like prose join the candidate in the output container.

use dom_query::NodeRef;

use crate::dom;
use crate::link_density::{inner_text, link_density};
use crate::patterns::SENTENCE_END;

use super::state::ExtractionState;
use super::CONTENT_CONTAINER_ID;

/// Minimum score threshold for a sibling, regardless of the top score.
const SIBLING_SCORE_FLOOR: f64 = 10.0;

/// Share of the top candidate's score a sibling needs.
const SIBLING_SCORE_RATIO: f64 = 0.2;

/// Paragraph length separating "long" from "short" sibling paragraphs.
const LONG_PARAGRAPH_LENGTH: usize = 80;

/// Maximum link density of a long sibling paragraph.
const LONG_PARAGRAPH_MAX_LINK_DENSITY: f64 = 0.25;

/// Move the top candidate and its qualifying siblings, in document order,
/// into a new detached output container.
pub fn aggregate_siblings<'a>(top: &NodeRef<'a>, state: &ExtractionState<'a>) -> NodeRef<'a> {
    let container = dom::create_element(top, "div");
    container.set_attr("id", CONTENT_CONTAINER_ID);

    let top_score = state.score(top).unwrap_or_default();
    let threshold = SIBLING_SCORE_FLOOR.max(top_score * SIBLING_SCORE_RATIO);

    let siblings = match top.parent() {
        Some(parent) => {
            // The document element has the document as parent; it moves whole, head included.
            if !parent.is_element() {
                tracing::debug!(tag = %dom::tag_name(top), "top candidate is the document element");
            }
            dom::element_children(&parent)
        }
        None => vec![*top],
    };

    for sibling in siblings {
        if should_append(&sibling, top, state, threshold) {
            tracing::debug!(
                tag = %dom::tag_name(&sibling),
                class = %dom::class_name(&sibling),
                id = %dom::id(&sibling),
                "appending sibling"
            );
            dom::move_into(&container, &sibling);
        }
    }

    container
}

fn should_append(sibling: &NodeRef, top: &NodeRef, state: &ExtractionState, threshold: f64) -> bool {
    if sibling.id == top.id {
        return true;
    }

    if state.score(sibling).is_some_and(|score| score >= threshold) {
        return true;
    }

    if dom::is_tag(sibling, "p") {
        let density = link_density(sibling);
        let text = inner_text(sibling, true);
        let length = text.chars().count();

        if length > LONG_PARAGRAPH_LENGTH && density < LONG_PARAGRAPH_MAX_LINK_DENSITY {
            return true;
        }
        if length <= LONG_PARAGRAPH_LENGTH && density == 0.0 && SENTENCE_END.is_match(&text) {
            return true;
        }
    }

    false
}
