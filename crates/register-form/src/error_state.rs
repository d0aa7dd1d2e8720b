// File: src/error_state.rs
// Purpose: Validation errors currently shown next to form controls

use std::collections::HashMap;

use crate::validation::FieldErrors;

/// Which of the two display states the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// No errors shown
    Pristine,
    /// At least one field shows validation errors
    ShowingErrors,
}

/// Field name to error messages currently displayed.
///
/// Replaced wholesale on every submit and cleared on reset; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorState {
    errors: HashMap<String, Vec<String>>,
}

impl FieldErrorState {
    /// Create empty error state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all errors with the result of a new validation
    pub fn replace(&mut self, errors: &FieldErrors) {
        self.errors = errors.clone().into_map();
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn status(&self) -> FormStatus {
        if self.errors.is_empty() {
            FormStatus::Pristine
        } else {
            FormStatus::ShowingErrors
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a specific field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get all messages for a field
    pub fn get_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Messages for a field as display text, comma separated
    pub fn error_text(&self, field: &str) -> Option<String> {
        self.errors
            .get(field)
            .filter(|messages| !messages.is_empty())
            .map(|messages| messages.join(","))
    }

    /// Get all errors
    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }
}
