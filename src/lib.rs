//! # rs-contentfinder
//!
//! Main-content extraction for HTML documents.
//!
//! Given a page, this library finds the element that most likely holds the
//! article, gathers the siblings that belong with it, and strips what is
//! left of the navigation, forms, plugins and link lists around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_contentfinder::extract;
//!
//! let html = r#"<html><body>
//! <div class="sidebar"><p>Links, links, and more links to elsewhere.</p></div>
//! <div class="article-body"><p>Main content here, long enough to be scored as prose.</p></div>
//! </body></html>"#;
//!
//! let result = extract(html);
//! assert!(result.content_text.contains("Main content here"));
//! assert!(!result.content_text.contains("more links"));
//! ```
//!
//! ## How it works
//!
//! 1. **Prepare**: guarantee a body, drop scripts and styles, turn break runs
//!    into paragraphs.
//! 2. **Scan**: remove elements whose class/id reads like boilerplate and
//!    turn block-free `div`s into paragraphs.
//! 3. **Score**: every paragraph scores its parent and grandparent.
//! 4. **Select**: the highest score after link-density scaling wins; the
//!    whole body is used when nothing qualifies.
//! 5. **Aggregate**: siblings that score well or read like prose join in.
//! 6. **Clean**: styles, forms, plugins, stray headers and link-heavy
//!    tables/lists/divs are removed from the result.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Fixed regex patterns shared by the pipeline.
pub mod patterns;

/// Lexical classification of class/id text.
pub mod classifier;

/// Content score arithmetic.
pub mod scoring;

/// Visible text and link density.
pub mod link_density;

/// Main content extraction module (state tracking and pipeline phases).
pub mod extractor;

/// Character encoding detection and decoding.
pub mod encoding;

use std::io::Read;

// Public API - re-exports
pub use classifier::{Classifier, ClassifierPatterns, LexicalClass};
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractResult;

/// Extracts main content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_contentfinder::extract;
///
/// let result = extract("<html><body><p>Short</p></body></html>");
/// assert!(result.used_body_fallback);
/// assert_eq!(result.content_text, "Short");
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_contentfinder::{extract_with_options, Options};
///
/// let html = r#"<body><div class="sidebar"><p>Reading list: books, essays, and talks.</p></div></body>"#;
/// let options = Options {
///     preserve_unlikely_candidates: true,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options);
/// assert!(result.content_text.contains("Reading list"));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    extractor::extract_content(html, options)
}

/// Extracts main content from HTML bytes with automatic encoding detection.
///
/// A byte-order mark decides the encoding; otherwise a `<meta>` charset
/// declaration in the first kilobyte; otherwise UTF-8. Invalid sequences are
/// replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_contentfinder::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = extract_bytes(html);
/// assert!(result.content_text.contains("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts main content from HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html = encoding::decode_html(html);
    extract_with_options(&html, options)
}

/// Reads a whole document from `reader` and extracts its main content.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails.
pub fn extract_reader<R: Read>(mut reader: R, options: &Options) -> Result<ExtractResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(extract_bytes_with_options(&bytes, options))
}
