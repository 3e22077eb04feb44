//! Empty-content guard.

use super::ValidationError;

/// Reports true if `data` is empty or only whitespace.
///
/// Whitespace is Unicode whitespace, so NBSP, NEL and friends count too.
/// Bytes that are not valid UTF-8 are never whitespace.
pub fn is_empty_content(data: &[u8]) -> bool {
    match std::str::from_utf8(data) {
        Ok(s) => s.trim().is_empty(),
        Err(_) => false,
    }
}

/// Returns [`ValidationError::EmptyContent`] if `data` is empty or only whitespace.
pub fn require_non_empty(data: &[u8]) -> Result<(), ValidationError> {
    if is_empty_content(data) {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}
