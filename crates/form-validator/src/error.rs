//! Parse Error Types

use thiserror::Error;

/// Errors while turning raw form input into a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Field absent from the posted form
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present but not parseable as a number
    #[error("Field '{field}' must be a number (got \"{value}\")")]
    NotNumeric { field: &'static str, value: String },
}
