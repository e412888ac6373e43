//! Paragraph scoring.
//!
//! Every paragraph long enough to matter pushes a score into its parent and
//! half of it into its grandparent. Those ancestors form the candidate set.

use dom_query::Document;

use crate::classifier::Classifier;
use crate::dom;
use crate::link_density::inner_text;
use crate::scoring::{paragraph_contribution, MIN_PARAGRAPH_LENGTH};

use super::state::ExtractionState;

/// Score every `<p>` in the document into `state`.
pub fn score_paragraphs<'a>(doc: &'a Document, state: &mut ExtractionState<'a>, classifier: &Classifier) {
    for paragraph in doc.select("p").nodes() {
        let text = inner_text(paragraph, true);
        let text_length = text.chars().count();
        if text_length < MIN_PARAGRAPH_LENGTH {
            continue;
        }

        let Some(parent) = dom::parent_element(paragraph) else {
            continue;
        };
        let grandparent = dom::parent_element(&parent);

        state.ensure_candidate(&parent, classifier);
        if let Some(grandparent) = &grandparent {
            state.ensure_candidate(grandparent, classifier);
        }

        let contribution = paragraph_contribution(&text, text_length);
        state.add_score(&parent, contribution);
        if let Some(grandparent) = &grandparent {
            state.add_score(grandparent, contribution / 2.0);
        }
    }
}
