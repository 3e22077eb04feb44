//! Pull the final status line out of collected response header lines.

use super::HttpStatus;

/// Parses the last `HTTP/x status [reason]` line.
///
/// With redirects followed, curl reports the headers of every hop, so only the
/// last status line belongs to the final response.
pub(crate) fn final_status(lines: &[String]) -> Option<HttpStatus> {
    lines.iter().rev().find_map(|line| parse_status_line(line))
}

fn parse_status_line(line: &str) -> Option<HttpStatus> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts
        .next()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    Some(HttpStatus { code, reason })
}
