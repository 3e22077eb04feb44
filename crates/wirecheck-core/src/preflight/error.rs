//! Probe errors and libcurl error classification.

use thiserror::Error;

use super::{HttpStatus, Method};

/// Why a probe failed.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// The target is not an absolute http/https URL; nothing was sent.
    #[error("invalid preflight target {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// No response at all (DNS, connect, timeout).
    #[error("preflight {method}: {source}")]
    Transport {
        method: Method,
        #[source]
        source: TransportError,
    },
    /// A response outside `[200, 400)` that rules out the target.
    #[error("preflight {method}: {status}")]
    Status { method: Method, status: HttpStatus },
}

impl ProbeError {
    /// Status code, if the failure was an HTTP status.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            ProbeError::Status { status, .. } => Some(status.code),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ProbeError::Transport { source, .. } if source.kind == TransportErrorKind::Timeout
        )
    }
}

/// Network-level failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Operation or connect timed out, or the probe deadline ran out.
    Timeout,
    /// DNS failure, refused or reset connection, empty reply.
    Connection,
    /// URL rejected by the client.
    InvalidUrl,
    Other,
}

/// A request that produced no usable HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        Self::new(classify_curl_error(&e), e.to_string())
    }
}

/// Classify a curl error into a transport error kind.
pub fn classify_curl_error(e: &curl::Error) -> TransportErrorKind {
    if e.is_operation_timedout() {
        return TransportErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportErrorKind::Connection;
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return TransportErrorKind::InvalidUrl;
    }
    TransportErrorKind::Other
}
