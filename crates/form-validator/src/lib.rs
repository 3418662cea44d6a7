//! Form Field Validation
//!
//! Turns raw posted form fields into a well-formed submission or a
//! structured parse error naming the offending field.

mod error;
mod submission;

pub use error::ParseError;
pub use submission::{RawSubmission, Submission};
