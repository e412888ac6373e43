//! Content score arithmetic.
//!
//! Pure functions behind the score annotator and the paragraph scorer. The
//! mutable per-node records live in [`crate::extractor::state`].

/// Paragraphs with less visible text than this are ignored by the scorer.
pub const MIN_PARAGRAPH_LENGTH: usize = 25;

/// Cap on the length bonus a single paragraph earns.
const MAX_LENGTH_BONUS: usize = 3;

/// Starting score of an element based on its tag.
///
/// Containers that typically wrap prose start ahead; list, form and heading
/// elements start behind.
#[must_use]
pub fn base_tag_score(tag: &str) -> f64 {
    match tag {
        "div" => 5.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    }
}

/// Number of comma-separated segments in `text` (commas + 1).
#[inline]
#[must_use]
pub fn comma_segments(text: &str) -> usize {
    text.split(',').count()
}

/// Score a paragraph contributes to its parent (the grandparent gets half).
///
/// One point for the paragraph, one per comma segment, and one per 100
/// characters up to three.
#[must_use]
pub fn paragraph_contribution(text: &str, text_length: usize) -> f64 {
    let length_bonus = (text_length / 100).min(MAX_LENGTH_BONUS);
    (1 + comma_segments(text) + length_bonus) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_scores_follow_tag_table() {
        assert_eq!(base_tag_score("div"), 5.0);
        assert_eq!(base_tag_score("blockquote"), 3.0);
        assert_eq!(base_tag_score("li"), -3.0);
        assert_eq!(base_tag_score("th"), -5.0);
        assert_eq!(base_tag_score("section"), 0.0);
        assert_eq!(base_tag_score("body"), 0.0);
    }

    #[test]
    fn comma_segments_counts_split_pieces() {
        assert_eq!(comma_segments("no commas"), 1);
        assert_eq!(comma_segments("one, two, three"), 3);
        assert_eq!(comma_segments(",,"), 3);
    }

    #[test]
    fn contribution_adds_base_commas_and_length() {
        let text = "First, second, and third words here.";
        // 1 base + 3 segments + 0 length bonus
        assert_eq!(paragraph_contribution(text, text.chars().count()), 4.0);
    }

    #[test]
    fn length_bonus_is_capped_at_three() {
        let long = "a".repeat(1000);
        assert_eq!(paragraph_contribution(&long, 1000), 5.0);
        assert_eq!(paragraph_contribution(&long[..250], 250), 4.0);
    }
}
