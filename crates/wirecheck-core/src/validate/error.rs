//! Error type for body validation.

use thiserror::Error;

/// Why a body failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty or only whitespace.
    #[error("empty content")]
    EmptyContent,
    /// Malformed JSON; `offset` is the byte index where the parser gave up.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
    /// A complete value was followed by another one.
    #[error("extra data after top-level value")]
    ExtraData,
    /// Any other decode failure (e.g. no value at all).
    #[error("{0}")]
    Decode(String),
}

impl ValidationError {
    /// Byte offset of a syntax error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ValidationError::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
