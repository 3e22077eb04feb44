//! Strict single-value JSON validation.

use serde::de::{Deserialize, IgnoredAny};
use serde_json::error::Category;

use super::ValidationError;

/// Returns `Ok(())` iff `data` is well-formed JSON holding exactly one
/// top-level value (object, array, string, number, true/false/null).
///
/// Values are skipped with [`IgnoredAny`], so numbers are scanned lexically
/// and never converted to `u64`/`f64`: huge integers and long decimals are
/// accepted as-is.
pub fn validate_json(data: &[u8]) -> Result<(), ValidationError> {
    let mut de = serde_json::Deserializer::from_slice(data);
    if let Err(e) = IgnoredAny::deserialize(&mut de) {
        return Err(first_value_error(data, &e));
    }

    // Only whitespace may follow. Anything else is either a second value
    // (extra data) or garbage (syntax error at its position).
    if de.end().is_ok() {
        return Ok(());
    }
    match IgnoredAny::deserialize(&mut de) {
        Ok(_) => Err(ValidationError::ExtraData),
        Err(e) => Err(syntax_error(data, &e)),
    }
}

fn first_value_error(data: &[u8], err: &serde_json::Error) -> ValidationError {
    match err.classify() {
        Category::Eof if is_json_whitespace(data) => {
            ValidationError::Decode("unexpected end of input".to_string())
        }
        Category::Syntax | Category::Eof => syntax_error(data, err),
        Category::Io | Category::Data => ValidationError::Decode(err.to_string()),
    }
}

fn syntax_error(data: &[u8], err: &serde_json::Error) -> ValidationError {
    ValidationError::Syntax {
        offset: byte_offset(data, err.line(), err.column()),
        message: message_without_position(err),
    }
}

/// True if `data` holds only the four insignificant JSON whitespace bytes.
fn is_json_whitespace(data: &[u8]) -> bool {
    data.iter()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}

/// Maps serde_json's 1-based line and byte column back to a byte index.
fn byte_offset(data: &[u8], line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        data.iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)
            .unwrap_or(data.len())
    };
    (line_start + column).min(data.len())
}

/// serde_json appends " at line L column C"; the offset replaces it.
fn message_without_position(err: &serde_json::Error) -> String {
    let full = err.to_string();
    if err.line() == 0 {
        return full;
    }
    match full.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => full,
    }
}
