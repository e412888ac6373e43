//! Configuration options for content extraction.

use crate::classifier::Classifier;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_contentfinder::{Classifier, ClassifierPatterns, Options};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Keep elements the classifier would prune, with a custom keyword table
/// let classifier = Classifier::new(&ClassifierPatterns {
///     unlikely: "sidebar|werbung".to_string(),
///     ..ClassifierPatterns::default()
/// })?;
/// let options = Options {
///     preserve_unlikely_candidates: true,
///     classifier,
/// };
/// # Ok::<(), rs_contentfinder::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Skip removal of elements whose class/id looks like boilerplate.
    ///
    /// Only the pruning pass is affected; class weights still count in
    /// scoring and cleanup.
    ///
    /// Default: `false`
    pub preserve_unlikely_candidates: bool,

    /// Keyword table used to classify class/id text.
    ///
    /// Default: the built-in English table
    pub classifier: Classifier,
}
