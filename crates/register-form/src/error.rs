// File: src/error.rs
// Purpose: Library error type

use thiserror::Error;

/// Errors that are not validation failures.
///
/// Validation failures are ordinary results (see [`crate::ValidationResult`])
/// and never come through this type.
#[derive(Debug, Error)]
pub enum FormError {
    /// A validated record did not fit the type it was decoded into
    #[error("validated record does not match target type: {0}")]
    Decode(#[from] serde_json::Error),

    /// A urlencoded body contained invalid UTF-8 after percent-decoding
    #[error("invalid percent-encoding in form body: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// JSON form input was not an object
    #[error("form values must be a JSON object")]
    NotAnObject,

    /// JSON form input held a value that cannot come from a form control
    #[error("unsupported value for field '{field}'")]
    UnsupportedValue { field: String },
}
