//! The seam between the probe algorithm and an HTTP client.

use std::fmt;
use std::time::Duration;

use super::TransportError;

/// The two requests a probe can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    /// GET with `Range: bytes=0-0`; at most one body byte is read.
    RangedGet,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Head => write!(f, "HEAD"),
            Method::RangedGet => write!(f, "GET"),
        }
    }
}

/// One outbound probe request.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub method: Method,
    pub url: &'a str,
    /// Hard limit for this request, already cut down to what is left of the
    /// probe deadline.
    pub timeout: Duration,
    pub follow_redirects: bool,
}

/// Final response status of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatus {
    pub code: u32,
    /// Reason phrase from the status line, when the server sent one.
    pub reason: Option<String>,
}

impl HttpStatus {
    pub fn new(code: u32) -> Self {
        Self { code, reason: None }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{} {}", self.code, reason),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Issues a single probe request and reports the final status.
///
/// Implementations must release the connection and any body before
/// returning, on success and on error.
pub trait ProbeTransport {
    fn send(&self, req: &Request<'_>) -> Result<HttpStatus, TransportError>;
}

impl<T: ProbeTransport + ?Sized> ProbeTransport for &T {
    fn send(&self, req: &Request<'_>) -> Result<HttpStatus, TransportError> {
        (**self).send(req)
    }
}
