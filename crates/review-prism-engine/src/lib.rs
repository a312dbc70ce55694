pub mod format;

// Re-export key types for easier usage
pub use format::cues::{CueError, CueKeywords, CueTable, Severity};
pub use format::summary::ReviewSummary;
pub use format::{
    FormatOptions, ReviewFormatter, UnterminatedFence, format_review_result,
    format_review_result_simple,
};
