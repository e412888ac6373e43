//! Top candidate selection.

use dom_query::NodeRef;

use crate::classifier::Classifier;
use crate::dom;

use super::state::ExtractionState;

/// The element chosen as the root of the article.
#[derive(Debug, Clone, Copy)]
pub struct TopCandidate<'a> {
    pub node: NodeRef<'a>,
    /// The whole body was wrapped because no candidate qualified.
    pub used_body_fallback: bool,
}

/// Pick the best candidate after link-density scaling.
///
/// Ties go to the earlier candidate. When nothing was scored, or the winner
/// is the body itself, the body's content is wrapped in a fresh `div` that
/// becomes the candidate.
pub fn select_top_candidate<'a>(
    body: &NodeRef<'a>,
    state: &mut ExtractionState<'a>,
    classifier: &Classifier,
) -> TopCandidate<'a> {
    state.apply_link_density();

    let mut top: Option<(NodeRef<'a>, f64)> = None;
    for candidate in state.candidates() {
        let score = state.score(candidate).unwrap_or_default();
        tracing::trace!(
            tag = %dom::tag_name(candidate),
            class = %dom::class_name(candidate),
            id = %dom::id(candidate),
            score,
            "candidate"
        );
        if top.is_none_or(|(_, best)| score > best) {
            top = Some((*candidate, score));
        }
    }

    match top {
        Some((node, score)) if node.id != body.id => {
            tracing::debug!(tag = %dom::tag_name(&node), score, "selected top candidate");
            TopCandidate {
                node,
                used_body_fallback: false,
            }
        }
        _ => {
            let wrapper = wrap_body(body);
            state.initialize_node(&wrapper, classifier);
            tracing::debug!("no usable candidate; wrapping the whole body");
            TopCandidate {
                node: wrapper,
                used_body_fallback: true,
            }
        }
    }
}

/// Move all of the body's children into a new `div` appended to the body.
fn wrap_body<'a>(body: &NodeRef<'a>) -> NodeRef<'a> {
    let wrapper = dom::create_element(body, "div");
    dom::move_children(body, &wrapper);
    body.append_child(&wrapper);
    wrapper
}
