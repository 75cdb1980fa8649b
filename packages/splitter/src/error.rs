//! Error types for the splitter.
//!
//! Field-level extraction misses are not represented here: they degrade
//! to absent fields inside the engine. These variants cover input
//! validation, whole-document extraction failures, and generation guards
//! checked before any output is written. None of them is transient, so
//! there is no retry policy.

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input buffer is empty.
    #[error("Input PDF is empty")]
    EmptyInput,

    /// Input file does not exist or is not a file.
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    /// The input cannot be parsed as a paged PDF document.
    #[error("Failed to parse PDF: {0}")]
    PdfParse(#[from] lopdf::Error),

    /// Text extraction failed for a specific page.
    #[error("Failed to extract text from page {page_index}: {source}")]
    PageText {
        page_index: usize,
        #[source]
        source: lopdf::Error,
    },

    /// A group cannot be materialized because it has no pages.
    #[error("Group '{0}' contains no pages")]
    EmptyGroup(String),

    /// A personnel group has no usable personnel number.
    #[error("Personnel group has no personnel number")]
    MissingPersonnelNumber,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failed.
    #[error("SEPA CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Manifest serialization failed.
    #[error("Manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
