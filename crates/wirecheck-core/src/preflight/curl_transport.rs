//! libcurl-backed probe transport.

use curl::easy::Easy;
use std::str;

use super::status_line;
use super::{HttpStatus, Method, ProbeTransport, Request, TransportError, TransportErrorKind};

/// Sends probe requests with a fresh libcurl easy handle per request.
///
/// The handle (and with it the connection and any unread body) is dropped
/// before `send` returns, whichever way it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl ProbeTransport for CurlTransport {
    fn send(&self, req: &Request<'_>) -> Result<HttpStatus, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body_seen = false;

        let mut easy = Easy::new();
        easy.url(req.url)?;
        easy.follow_location(req.follow_redirects)?;
        easy.connect_timeout(req.timeout)?;
        easy.timeout(req.timeout)?;
        match req.method {
            Method::Head => easy.nobody(true)?,
            Method::RangedGet => {
                easy.get(true)?;
                easy.range("0-0")?;
            }
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            // Take the first chunk and stop: returning short makes libcurl
            // abort with a write error, which is expected here.
            transfer.write_function(|data| {
                if data.is_empty() {
                    return Ok(0);
                }
                body_seen = true;
                Ok(0)
            })?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if !(body_seen && e.is_write_error()) {
                return Err(e.into());
            }
        }

        let code = easy.response_code()?;
        if code == 0 {
            return Err(TransportError::new(
                TransportErrorKind::Connection,
                format!("{} {}: no response", req.method, req.url),
            ));
        }
        let reason = status_line::final_status(&header_lines).and_then(|s| {
            if s.code == code {
                s.reason
            } else {
                None
            }
        });
        Ok(HttpStatus { code, reason })
    }
}
