//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a vocabulary sheet.
///
/// The aggregation pipeline itself never fails; only text input can.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing Arabic text at line {line}")]
    MissingArabic { line: usize },

    #[error("missing Bengali text at line {line}")]
    MissingBengali { line: usize },

    #[error("entry at line {line} appears before any category heading")]
    MissingCategory { line: usize },

    #[error("duplicate {field} field at line {line}")]
    DuplicateField { field: &'static str, line: usize },

    #[error("unexpected content at line {line}: {content}")]
    UnexpectedLine { line: usize, content: String },

    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
}
