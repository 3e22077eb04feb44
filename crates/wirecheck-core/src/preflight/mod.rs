//! Reachability preflight.
//!
//! Decides whether a URL is fetchable with at most two requests: a HEAD, and
//! only when the server does not support HEAD (405/501, or no response at
//! all), a GET for the first byte (`Range: bytes=0-0`). Any status in
//! `[200, 400)` counts as reachable.

mod curl_transport;
mod deadline;
mod error;
mod status_line;
mod transport;

pub use curl_transport::CurlTransport;
pub use deadline::TimeoutScope;
pub use error::{ProbeError, TransportError, TransportErrorKind};
pub use transport::{HttpStatus, Method, ProbeTransport, Request};

pub(crate) use status_line::final_status;

use deadline::Deadline;
use std::time::Duration;

/// Default bound on a whole probe call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call probe settings. Passed explicitly; there is no process-wide client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOptions {
    pub timeout: Duration,
    /// Whether `timeout` bounds the whole probe or each request separately.
    pub timeout_scope: TimeoutScope,
    /// When false, 3xx responses are judged as-is (and accepted). When true,
    /// redirects are followed and the final status is judged.
    pub follow_redirects: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            timeout_scope: TimeoutScope::default(),
            follow_redirects: false,
        }
    }
}

impl ProbeOptions {
    /// Default options with a different timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

/// Checks that `url` is reachable using libcurl and default options.
pub fn preflight(url: &str, timeout: Duration) -> Result<(), ProbeError> {
    probe(&CurlTransport, url, &ProbeOptions::with_timeout(timeout))
}

/// Checks that `url` is reachable: HEAD first, ranged GET as the fallback.
///
/// Blocks on network I/O; call from `spawn_blocking` if used from async code.
pub fn probe<T>(transport: &T, url: &str, opts: &ProbeOptions) -> Result<(), ProbeError>
where
    T: ProbeTransport + ?Sized,
{
    check_target(url)?;
    let deadline = Deadline::start(opts.timeout, opts.timeout_scope);
    let request = |method: Method| {
        deadline
            .budget()
            .map(|timeout| Request {
                method,
                url,
                timeout,
                follow_redirects: opts.follow_redirects,
            })
            .map_err(|source| ProbeError::Transport { method, source })
    };

    match transport.send(&request(Method::Head)?) {
        Ok(status) if is_reachable(status.code) => {
            tracing::debug!(url, %status, "preflight HEAD ok");
            return Ok(());
        }
        Ok(status) if head_unsupported(status.code) => {
            tracing::debug!(url, %status, "HEAD not supported, trying ranged GET");
        }
        Ok(status) => {
            return Err(ProbeError::Status {
                method: Method::Head,
                status,
            });
        }
        // No response at all is treated like "HEAD unsupported".
        Err(e) => {
            tracing::debug!(url, error = %e, "HEAD got no response, trying ranged GET");
        }
    }

    let status = transport
        .send(&request(Method::RangedGet)?)
        .map_err(|source| ProbeError::Transport {
            method: Method::RangedGet,
            source,
        })?;
    if !is_reachable(status.code) {
        return Err(ProbeError::Status {
            method: Method::RangedGet,
            status,
        });
    }
    tracing::debug!(url, %status, "preflight GET ok");
    Ok(())
}

/// 2xx and 3xx.
fn is_reachable(code: u32) -> bool {
    (200..400).contains(&code)
}

/// Statuses that mean "this server does not do HEAD", as opposed to a real failure.
fn head_unsupported(code: u32) -> bool {
    code == 405 || code == 501
}

fn check_target(url: &str) -> Result<(), ProbeError> {
    let parsed = url::Url::parse(url).map_err(|e| ProbeError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ProbeError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}
