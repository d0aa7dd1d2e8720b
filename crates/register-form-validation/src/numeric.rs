//! Numeric coercion

use alloc::string::{String, ToString};

/// Message for text that does not coerce to a number
pub const NAN_MESSAGE: &str = "Expected number, received nan";

/// Coerces submitted text to a finite number.
///
/// Surrounding whitespace is ignored, as it is for `<input type="number">`.
pub fn coerce_number(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(NAN_MESSAGE.to_string()),
    }
}
