//! Compiled regex patterns used by the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock` and shared by
//! every extraction run. Patterns are organized by the pipeline stage that
//! uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Lexical Classifier Tables (class/id keywords)
// =============================================================================

/// Class/id keywords of elements that are almost never article content.
pub const UNLIKELY_CANDIDATES: &str =
    "combx|comment|disqus|foot|header|menu|meta|nav|rss|shoutbox|sidebar|sponsor";

/// Keywords that rescue an element otherwise flagged as unlikely.
pub const MAYBE_CANDIDATE: &str = "and|article|body|column|main";

/// Keywords that raise an element's class weight.
pub const POSITIVE: &str = "article|body|content|entry|hentry|page|pagination|post|text";

/// Keywords that lower an element's class weight.
pub const NEGATIVE: &str = "combx|comment|contact|foot|footer|footnote|link|media|meta|promo|related|scroll|shoutbox|sponsor|tags|widget";

// =============================================================================
// Tree Normalization Patterns
// =============================================================================

/// Two or more consecutive `<br>` tags (with only whitespace between them).
pub static REPLACE_BRS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:<br[^>]*>[ \n\r\t]*){2,}").expect("REPLACE_BRS regex")
});

/// Opening tags that mark a `div` as holding block content.
///
/// Deliberately unanchored after the tag name, so `<abbr` or `<param` also
/// count as block openers.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:a|blockquote|dl|div|img|ol|p|pre|table|ul)").expect("DIV_TO_P_ELEMENTS regex")
});

// =============================================================================
// Text Patterns
// =============================================================================

/// Runs of two or more whitespace characters.
pub static NORMALIZE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{2,}").expect("NORMALIZE_WHITESPACE regex")
});

/// A period followed by a space or the end of the text.
pub static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?: |$)").expect("SENTENCE_END regex")
});

// =============================================================================
// Content Cleaning Patterns
// =============================================================================

/// Runs of `<br>` tags, optionally separated by whitespace or `&nbsp;`.
pub static KILL_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<br\s*/?>(?:\s|&nbsp;?)*)+").expect("KILL_BREAKS regex")
});

/// A `<br>` directly followed by a paragraph opening tag.
pub static BR_BEFORE_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br[^>]*>\s*<p").expect("BR_BEFORE_PARAGRAPH regex")
});

/// Video hosts whose embeds survive cleaning.
pub static VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:www\.)?(?:youtube|vimeo)\.com").expect("VIDEO regex")
});
