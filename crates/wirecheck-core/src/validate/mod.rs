//! Request body validation.
//!
//! Two checks, meant to run in order: [`require_non_empty`] rejects empty or
//! whitespace-only payloads, then [`validate_json`] accepts exactly one
//! well-formed top-level JSON value. Neither keeps a reference to the input.

mod content;
mod error;
mod json;

pub use content::{is_empty_content, require_non_empty};
pub use error::ValidationError;
pub use json::validate_json;

/// Runs the empty-content guard, then JSON validation.
///
/// Empty or whitespace-only input is reported as [`ValidationError::EmptyContent`]
/// rather than as a parser end-of-input error.
pub fn validate_body(data: &[u8]) -> Result<(), ValidationError> {
    require_non_empty(data)?;
    validate_json(data)
}
