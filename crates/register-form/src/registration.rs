// File: src/registration.rs
// Purpose: The registration form's schema and typed result

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FormError;
use crate::field_values::FieldValues;
use crate::schema::{FieldSpec, Schema};
use crate::validation::ValidationResult;

const FIVE_CHARACTERS: &str = "Must have 5 characters";

static REGISTRATION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::text("fname")
            .label("First Name")
            .min_length_msg(5, FIVE_CHARACTERS),
        FieldSpec::text("lname").label("Last Name").optional(),
        FieldSpec::text("password")
            .label("Password")
            .min_length_msg(5, FIVE_CHARACTERS),
        FieldSpec::numeric("gradAge").label("Graduation Age"),
        FieldSpec::text("address").label("Address"),
        FieldSpec::text("qualification").label("Highest Qualification"),
        FieldSpec::text("gender").label("Gender"),
        FieldSpec::checkbox("isAdult").label("Age Above 18?"),
        FieldSpec::repeatable("courses").label("Courses"),
    ])
});

/// The registration schema, built once
pub fn registration_schema() -> &'static Schema {
    &REGISTRATION_SCHEMA
}

/// A validated registration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub fname: String,
    pub lname: Option<String>,
    pub password: String,
    pub grad_age: f64,
    pub address: String,
    pub qualification: String,
    pub gender: String,
    pub is_adult: bool,
    pub courses: Vec<String>,
}

// Keeps the password out of logs.
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("fname", &self.fname)
            .field("lname", &self.lname)
            .field("password", &"***")
            .field("grad_age", &self.grad_age)
            .field("address", &self.address)
            .field("qualification", &self.qualification)
            .field("gender", &self.gender)
            .field("is_adult", &self.is_adult)
            .field("courses", &self.courses)
            .finish()
    }
}

/// Validate raw values as a registration
pub fn validate_registration(
    values: &FieldValues,
) -> Result<ValidationResult<Registration>, FormError> {
    match registration_schema().validate(values) {
        ValidationResult::Success { data } => Ok(ValidationResult::Success {
            data: data.decode()?,
        }),
        ValidationResult::Failure { field_errors } => Ok(ValidationResult::Failure { field_errors }),
    }
}
