//! Plain GET + JSON decode over libcurl, for the user and email-header clients.

use curl::easy::Easy;
use serde::de::DeserializeOwned;
use std::str;
use std::time::Duration;
use thiserror::Error;

use crate::preflight::{HttpStatus, TransportError, TransportErrorKind};

/// Bodies larger than this are refused rather than buffered.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("do request: {0}")]
    Transport(#[from] TransportError),
    /// Anything but 200 OK.
    #[error("unexpected status: {0}")]
    Status(HttpStatus),
    #[error("decode: {0}")]
    Decode(String),
}

/// GETs `url` (following redirects) and returns the final status and body.
pub fn get(url: &str, timeout: Duration) -> Result<(HttpStatus, Vec<u8>), FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();
    let mut too_large = false;

    let mut easy = Easy::new();
    easy.url(url).map_err(TransportError::from)?;
    easy.get(true).map_err(TransportError::from)?;
    easy.follow_location(true).map_err(TransportError::from)?;
    easy.connect_timeout(timeout).map_err(TransportError::from)?;
    easy.timeout(timeout).map_err(TransportError::from)?;
    easy.accept_encoding("").map_err(TransportError::from)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(TransportError::from)?;
        transfer
            .write_function(|data| {
                if body.len() + data.len() > MAX_BODY_BYTES {
                    too_large = true;
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(TransportError::from)?;
        transfer.perform()
    };
    if too_large {
        return Err(FetchError::Decode(format!(
            "response body exceeds {} bytes",
            MAX_BODY_BYTES
        )));
    }
    performed.map_err(TransportError::from)?;

    let code = easy.response_code().map_err(TransportError::from)?;
    if code == 0 {
        return Err(TransportError::new(TransportErrorKind::Connection, "no response").into());
    }
    let reason = crate::preflight::final_status(&header_lines)
        .filter(|s| s.code == code)
        .and_then(|s| s.reason);
    Ok((HttpStatus { code, reason }, body))
}

/// GETs `url`, requires 200 OK, and decodes the body as JSON into `T`.
pub fn get_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T, FetchError> {
    let (status, body) = get(url, timeout)?;
    if status.code != 200 {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
