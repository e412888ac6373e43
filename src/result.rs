//! Result types for extraction output.

use serde::Serialize;

/// Result of content extraction from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractResult {
    /// Serialized children of the output container after cleanup.
    pub content_html: String,

    /// Visible text of the output container, whitespace normalized.
    pub content_text: String,

    /// Final score of the selected candidate, after link-density scaling.
    pub top_score: f64,

    /// No candidate qualified and the whole body was used.
    pub used_body_fallback: bool,

    /// Number of elements that received a score from a paragraph.
    pub candidate_count: usize,
}

impl ExtractResult {
    /// Whether any visible text was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content_text.is_empty()
    }
}
