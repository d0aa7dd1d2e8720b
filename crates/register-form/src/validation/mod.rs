// File: src/validation/mod.rs
// Purpose: Validation outcome and per-field error types

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

mod record;

pub use record::Record;

/// Validation messages for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {}", .messages.join(", "))]
pub struct FieldValidationError {
    pub field: String,
    pub messages: Vec<String>,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            field: field.into(),
            messages,
        }
    }
}

/// Errors for every invalid field, in schema declaration order.
///
/// Fields without violations are absent. Serializes as a map of field name
/// to messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add messages for a field, merging with any already recorded for it
    pub fn push(&mut self, error: FieldValidationError) {
        match self.errors.iter_mut().find(|e| e.field == error.field) {
            Some(existing) => existing.messages.extend(error.messages),
            None => self.errors.push(error),
        }
    }

    /// Messages for a specific field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Names of the invalid fields
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn first(&self) -> Option<&FieldValidationError> {
        self.errors.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldValidationError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a map keyed by field name
    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.errors
            .into_iter()
            .map(|e| (e.field, e.messages))
            .collect()
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldValidationError;
    type IntoIter = std::vec::IntoIter<FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::slice::Iter<'a, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(&error.field, &error.messages)?;
        }
        map.end()
    }
}

/// Outcome of validating raw field values against a schema
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    Success { data: T },
    Failure { field_errors: FieldErrors },
}

impl<T> ValidationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ValidationResult::Success { data } => Some(data),
            ValidationResult::Failure { .. } => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Success { .. } => None,
            ValidationResult::Failure { field_errors } => Some(field_errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            ValidationResult::Success { data } => ValidationResult::Success { data: f(data) },
            ValidationResult::Failure { field_errors } => ValidationResult::Failure { field_errors },
        }
    }

    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            ValidationResult::Success { data } => Ok(data),
            ValidationResult::Failure { field_errors } => Err(field_errors),
        }
    }
}

/// Serializes as `{ "success": true, "data": .. }` or
/// `{ "success": false, "fieldErrors": { .. } }`
impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ValidationResult::Failure { field_errors } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("fieldErrors", field_errors)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn required(field: &str) -> FieldValidationError {
        FieldValidationError::new(field, vec!["Required".to_string()])
    }

    #[test]
    fn test_field_errors_merge_same_field() {
        let mut errors = FieldErrors::new();
        errors.push(required("fname"));
        errors.push(FieldValidationError::new("fname", vec!["Too short".to_string()]));
        errors.push(required("gender"));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("fname"),
            Some(&["Required".to_string(), "Too short".to_string()][..])
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["fname", "gender"]);
        assert_eq!(errors.first().map(|e| e.field.as_str()), Some("fname"));
    }

    #[test]
    fn test_field_validation_error_display() {
        let error = FieldValidationError::new(
            "password",
            vec!["Required".to_string(), "Too short".to_string()],
        );
        assert_eq!(error.to_string(), "password: Required, Too short");
    }

    #[test]
    fn test_result_serialization() {
        let ok: ValidationResult<u8> = ValidationResult::Success { data: 7 };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({ "success": true, "data": 7 })
        );

        let failed: ValidationResult<u8> = ValidationResult::Failure {
            field_errors: [required("address")].into_iter().collect(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({ "success": false, "fieldErrors": { "address": ["Required"] } })
        );
    }

    #[test]
    fn test_result_accessors() {
        let failed: ValidationResult<u8> = ValidationResult::Failure {
            field_errors: [required("gender")].into_iter().collect(),
        };
        assert!(!failed.is_success());
        assert!(failed.data().is_none());
        assert!(failed.field_errors().is_some_and(|e| e.contains("gender")));

        let mapped = ValidationResult::Success { data: 2 }.map(|n: u8| n * 2);
        assert_eq!(mapped.into_result(), Ok(4));
    }
}
