//! Lexical classification of class/id attribute text.
//!
//! A [`Classifier`] maps the class and id strings of an element to the four
//! lexical categories used by the pipeline (unlikely, maybe, positive,
//! negative) and to a numeric class weight. The built-in table targets
//! English vocabulary; callers may swap in their own via [`Classifier::new`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::patterns;

/// Weight added or removed per positive/negative attribute match.
const WEIGHT_STEP: i32 = 25;

/// Pattern source strings for a classifier table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierPatterns {
    /// Elements matching this are removed by the candidate scanner.
    pub unlikely: String,
    /// Rescues an element that also matches `unlikely`.
    pub maybe: String,
    /// Adds weight.
    pub positive: String,
    /// Removes weight.
    pub negative: String,
}

impl Default for ClassifierPatterns {
    fn default() -> Self {
        Self {
            unlikely: patterns::UNLIKELY_CANDIDATES.to_string(),
            maybe: patterns::MAYBE_CANDIDATE.to_string(),
            positive: patterns::POSITIVE.to_string(),
            negative: patterns::NEGATIVE.to_string(),
        }
    }
}

/// Category flags for one piece of attribute text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalClass {
    pub is_unlikely: bool,
    pub is_maybe: bool,
    pub is_positive: bool,
    pub is_negative: bool,
}

impl LexicalClass {
    /// Unlikely and not rescued by the maybe category.
    #[must_use]
    pub fn is_removable(&self) -> bool {
        self.is_unlikely && !self.is_maybe
    }
}

/// Compiled lexical classifier table.
///
/// Cloning is cheap: compiled regexes are reference counted internally.
#[derive(Debug, Clone)]
pub struct Classifier {
    unlikely: Regex,
    maybe: Regex,
    positive: Regex,
    negative: Regex,
}

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::new(&ClassifierPatterns::default()).expect("default classifier patterns")
});

impl Classifier {
    /// Compile a classifier from pattern strings.
    ///
    /// Patterns are matched case-insensitively anywhere in the text.
    pub fn new(patterns: &ClassifierPatterns) -> Result<Self> {
        Ok(Self {
            unlikely: compile("unlikely", &patterns.unlikely)?,
            maybe: compile("maybe", &patterns.maybe)?,
            positive: compile("positive", &patterns.positive)?,
            negative: compile("negative", &patterns.negative)?,
        })
    }

    /// Classify a concatenated class+id string.
    #[must_use]
    pub fn classify(&self, text: &str) -> LexicalClass {
        LexicalClass {
            is_unlikely: self.unlikely.is_match(text),
            is_maybe: self.maybe.is_match(text),
            is_positive: self.positive.is_match(text),
            is_negative: self.negative.is_match(text),
        }
    }

    /// Class weight from the `class` and `id` attributes.
    ///
    /// Each non-empty attribute contributes -25 for a negative match and +25
    /// for a positive match; both may apply.
    #[must_use]
    pub fn weight(&self, class: &str, id: &str) -> i32 {
        self.attribute_weight(class) + self.attribute_weight(id)
    }

    fn attribute_weight(&self, value: &str) -> i32 {
        if value.is_empty() {
            return 0;
        }
        let mut weight = 0;
        if self.negative.is_match(value) {
            weight -= WEIGHT_STEP;
        }
        if self.positive.is_match(value) {
            weight += WEIGHT_STEP;
        }
        weight
    }
}

impl Default for Classifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

fn compile(category: &'static str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern { category, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_flags_unlikely_and_maybe() {
        let classifier = Classifier::default();

        let sidebar = classifier.classify("sidebar comment");
        assert!(sidebar.is_unlikely);
        assert!(!sidebar.is_maybe);
        assert!(sidebar.is_removable());

        let main_nav = classifier.classify("main-nav");
        assert!(main_nav.is_unlikely);
        assert!(main_nav.is_maybe);
        assert!(!main_nav.is_removable());
    }

    #[test]
    fn classify_is_case_insensitive() {
        let classifier = Classifier::default();
        assert!(classifier.classify("SideBar").is_unlikely);
        assert!(classifier.classify("ArticleBody").is_positive);
    }

    #[test]
    fn weight_combines_class_and_id() {
        let classifier = Classifier::default();
        assert_eq!(classifier.weight("", ""), 0);
        assert_eq!(classifier.weight("article-body", ""), 25);
        assert_eq!(classifier.weight("", "footer-table"), -25);
        assert_eq!(classifier.weight("post", "related"), 0);
        assert_eq!(classifier.weight("content", "main-text"), 50);
    }

    #[test]
    fn weight_applies_both_signs_for_one_attribute() {
        // "entry" is positive, "comment" is negative
        let classifier = Classifier::default();
        assert_eq!(classifier.weight("entry comment", ""), 0);
    }

    #[test]
    fn custom_patterns_replace_default_table() {
        let patterns = ClassifierPatterns {
            unlikely: "werbung".to_string(),
            maybe: "artikel".to_string(),
            positive: "inhalt".to_string(),
            negative: "kommentar".to_string(),
        };
        let classifier = Classifier::new(&patterns).unwrap();

        assert!(classifier.classify("werbung-box").is_removable());
        assert!(!classifier.classify("sidebar").is_unlikely);
        assert_eq!(classifier.weight("inhalt", "kommentar"), 0);
        assert_eq!(classifier.weight("inhalt", ""), 25);
    }

    #[test]
    fn invalid_pattern_reports_category() {
        let patterns = ClassifierPatterns {
            negative: "(unclosed".to_string(),
            ..ClassifierPatterns::default()
        };
        let err = Classifier::new(&patterns).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { category: "negative", .. }));
    }
}
