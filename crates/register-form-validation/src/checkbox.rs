//! Checkbox coercion

use alloc::string::{String, ToString};

use crate::INVALID_INPUT_MESSAGE;

/// Value a browser submits for a checked checkbox without a `value` attribute
pub const CHECKBOX_ON: &str = "on";

/// Coerces checkbox presence to a boolean.
///
/// An unchecked box is simply absent from the submission.
pub fn coerce_checkbox(value: Option<&str>) -> Result<bool, String> {
    match value {
        None => Ok(false),
        Some(CHECKBOX_ON) => Ok(true),
        Some(_) => Err(INVALID_INPUT_MESSAGE.to_string()),
    }
}
