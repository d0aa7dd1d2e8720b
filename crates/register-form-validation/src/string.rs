//! String validation functions

use alloc::format;
use alloc::string::String;

/// Returns the submitted text, treating an empty string as "not submitted".
///
/// Browsers submit empty text inputs as `""`; for validation purposes those
/// are the same as a missing entry.
pub fn present_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Length in UTF-16 code units, the way a browser counts `value.length`
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Validates minimum string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if text_len(s) >= min {
        Ok(())
    } else {
        Err(format!("String must contain at least {} character(s)", min))
    }
}
