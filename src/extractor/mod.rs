//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `state`: Score records and candidate set for one run
//! - `normalize`: Document preparation (body, scripts, breaks, fonts)
//! - `candidates`: Unlikely-candidate pruning and div-to-paragraph conversion
//! - `paragraphs`: Paragraph scoring into parents and grandparents
//! - `selection`: Top candidate selection with body fallback
//! - `siblings`: Aggregation of related siblings into the output container
//! - `cleaning`: Cleanup of the output container
//! - `pipeline`: Main extraction pipeline orchestration
//!
//! # Usage
//!
//! ```rust,ignore
//! use rs_contentfinder::extractor::{pipeline, ExtractionState};
//!
//! let result = pipeline::extract_content(html, &options);
//!
//! // Or drive the phases by hand:
//! let doc = dom::parse(html);
//! let body = normalize::prep_document(&doc);
//! candidates::scan(&doc, &body, &classifier, false);
//!
//! let mut state = ExtractionState::new();
//! paragraphs::score_paragraphs(&doc, &mut state, &classifier);
//! let top = selection::select_top_candidate(&body, &mut state, &classifier);
//! ```

pub mod candidates;
pub mod cleaning;
pub mod normalize;
pub mod paragraphs;
pub mod pipeline;
pub mod selection;
pub mod siblings;
pub mod state;

/// `id` of the output container.
pub const CONTENT_CONTAINER_ID: &str = "readability-content";

/// Elements with exactly this class keep their inline `style`.
pub const STYLED_CLASS: &str = "readability-styled";

/// Linked stylesheets whose `href` contains this stay enabled.
pub const OWN_STYLESHEET_MARKER: &str = "readability";

pub use pipeline::extract_content;
pub use selection::TopCandidate;
pub use state::ExtractionState;
