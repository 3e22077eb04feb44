//! One error type and one classification for everything the core can fail with.

use thiserror::Error;

use crate::email_header::EmailHeaderError;
use crate::fetch::FetchError;
use crate::preflight::ProbeError;
use crate::validate::ValidationError;

/// Stable failure classes, independent of the library that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was empty or whitespace only.
    EmptyContent,
    /// Malformed JSON at a known byte offset.
    Syntax { offset: usize },
    /// More than one top-level JSON value.
    ExtraData,
    /// Any other decode failure.
    Decode,
    /// No HTTP response (DNS, connect, timeout, bad URL).
    Transport,
    /// HTTP response outside the accepted band.
    Status { status: u32 },
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    EmailHeader(#[from] EmailHeaderError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(e) => e.kind(),
            Error::Probe(e) => e.kind(),
            Error::Fetch(e) => e.kind(),
            Error::EmailHeader(e) => e.kind(),
        }
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyContent => ErrorKind::EmptyContent,
            ValidationError::Syntax { offset, .. } => ErrorKind::Syntax { offset: *offset },
            ValidationError::ExtraData => ErrorKind::ExtraData,
            ValidationError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl ProbeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbeError::InvalidUrl { .. } | ProbeError::Transport { .. } => ErrorKind::Transport,
            ProbeError::Status { status, .. } => ErrorKind::Status {
                status: status.code,
            },
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Status(status) => ErrorKind::Status {
                status: status.code,
            },
            FetchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl EmailHeaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmailHeaderError::Fetch(e) => e.kind(),
            EmailHeaderError::MissingEmail => ErrorKind::Decode,
        }
    }
}
