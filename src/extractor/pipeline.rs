//! Content extraction pipeline.
//!
//! Runs the phases in order on a freshly parsed document: prepare, scan,
//! score paragraphs, select, aggregate siblings, clean.

use crate::dom;
use crate::link_density::inner_text;
use crate::{ExtractResult, Options};

use super::candidates::scan;
use super::cleaning::prep_article;
use super::normalize::prep_document;
use super::paragraphs::score_paragraphs;
use super::selection::select_top_candidate;
use super::siblings::aggregate_siblings;
use super::state::ExtractionState;

/// Extract the main content of an HTML document.
///
/// Never fails: documents without a usable candidate fall back to the whole
/// body, and an empty document yields an empty result.
#[must_use]
pub fn extract_content(html: &str, opts: &Options) -> ExtractResult {
    let classifier = &opts.classifier;
    let doc = dom::parse(html);

    let body = prep_document(&doc);
    scan(&doc, &body, classifier, opts.preserve_unlikely_candidates);

    let mut state = ExtractionState::new();
    score_paragraphs(&doc, &mut state, classifier);
    let candidate_count = state.candidates().len();

    let top = select_top_candidate(&body, &mut state, classifier);
    let top_score = state.score(&top.node).unwrap_or_default();

    let article = aggregate_siblings(&top.node, &state);
    prep_article(&article, &top.node, classifier);

    let content_html = dom::inner_html(&article).to_string();
    let content_text = inner_text(&article, true);

    tracing::debug!(
        candidate_count,
        top_score,
        used_body_fallback = top.used_body_fallback,
        html_len = content_html.len(),
        "extraction finished"
    );

    ExtractResult {
        content_html,
        content_text,
        top_score,
        used_body_fallback: top.used_body_fallback,
        candidate_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "Content extraction keeps the paragraphs, the headings, and the lists that matter.";

    #[test]
    fn test_short_body_is_rewrapped() {
        let result = extract_content("<body><p>Short</p></body>", &Options::default());

        assert!(result.used_body_fallback);
        assert_eq!(result.candidate_count, 0);
        assert!(result.content_html.contains("<p>Short</p>"));
        assert_eq!(result.content_text, "Short");
    }

    #[test]
    fn test_top_score_reported_after_scaling() {
        let html = format!(r#"<body><div class="post"><p>{PROSE}</p></div></body>"#);
        let result = extract_content(&html, &Options::default());

        assert!(!result.used_body_fallback);
        assert_eq!(result.candidate_count, 2);
        // div base 5 + positive class 25 + (1 + 3 comma segments + 0 length bonus)
        assert!((result.top_score - 34.0).abs() < f64::EPSILON);
        assert!(result.content_text.contains("Content extraction keeps"));
    }

    #[test]
    fn test_empty_input() {
        let result = extract_content("", &Options::default());

        assert!(result.used_body_fallback);
        assert_eq!(result.content_text, "");
    }
}
