//! Candidate scanning: one destructive pass over every element.
//!
//! Removes elements whose class/id looks like boilerplate and turns `div`s
//! that hold no block content into paragraphs, so the paragraph scorer sees
//! them.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef};

use crate::classifier::Classifier;
use crate::dom;
use crate::patterns::DIV_TO_P_ELEMENTS;

/// Walk all elements in document order, pruning unlikely candidates (unless
/// `preserve_unlikely` is set) and converting block-free `div`s to `p`.
///
/// The walk computes its next stop before mutating, so a removed subtree is
/// never revisited and the element that follows it is never skipped.
pub fn scan(doc: &Document, body: &NodeRef, classifier: &Classifier, preserve_unlikely: bool) {
    let protected = protected_ids(body);
    let mut cursor = dom::next_element(&doc.root());

    while let Some(node) = cursor {
        if !preserve_unlikely && !protected.contains(&node.id) && is_unlikely(&node, classifier) {
            tracing::debug!(
                tag = %dom::tag_name(&node),
                class = %dom::class_name(&node),
                id = %dom::id(&node),
                "removing unlikely candidate"
            );
            cursor = dom::next_element_after_subtree(&node);
            dom::remove(&node);
            continue;
        }

        if dom::is_tag(&node, "div") && !has_block_content(&node) {
            if let Some(paragraph) = dom::replace_with_new_element(&node, "p") {
                tracing::debug!(class = %dom::class_name(&node), "altering div to p");
                cursor = dom::next_element(&paragraph);
                continue;
            }
            tracing::debug!("could not alter div to p");
        }

        cursor = dom::next_element(&node);
    }
}

/// The body and every element containing it.
///
/// Removing any of these would take the body with it.
fn protected_ids(body: &NodeRef) -> HashSet<NodeId> {
    let mut ids = HashSet::new();
    let mut current = Some(*body);
    while let Some(node) = current {
        ids.insert(node.id);
        current = node.parent();
    }
    ids
}

fn is_unlikely(node: &NodeRef, classifier: &Classifier) -> bool {
    let match_string = format!("{}{}", dom::class_name(node), dom::id(node));
    if match_string.is_empty() {
        return false;
    }
    classifier.classify(&match_string).is_removable()
}

fn has_block_content(node: &NodeRef) -> bool {
    DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(node))
}
