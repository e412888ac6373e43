//! Error types for rs-contentfinder.
//!
//! Extraction itself never fails; these errors come from the fallible edges
//! of the API (custom classifier tables and reader input).

/// Error type for the fallible parts of the API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A custom lexical pattern did not compile.
    #[error("invalid {category} pattern: {source}")]
    InvalidPattern {
        /// Which lexical category the pattern belongs to.
        category: &'static str,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Reading the input document failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
