//! # register-form
//!
//! A registration form: schema-driven validation of submitted values, inline
//! error display, and focus routing to the first invalid control.
//!
//! ## Quick Start
//!
//! ```rust
//! use register_form::{FieldValues, FormConfig, RecordingFocus, RegistrationController, Submission};
//!
//! let mut form = RegistrationController::registration(FormConfig::default());
//! let mut focus = RecordingFocus::new();
//!
//! let values = FieldValues::from_pairs([("fname", "Al"), ("password", "secret1")]);
//! let outcome = form.submit(&values, &mut focus).unwrap();
//!
//! assert!(matches!(outcome, Submission::Invalid { .. }));
//! assert_eq!(focus.current(), Some("fname"));
//! assert_eq!(form.errors().error_text("fname").as_deref(), Some("Must have 5 characters"));
//! ```
//!
//! ## Architecture
//!
//! - [`Schema`] validates [`FieldValues`] into a [`ValidationResult`] as a pure
//!   function, independent of rendering.
//! - [`FormController`] owns the [`FieldErrorState`] and is the only thing
//!   that changes it (`submit`, `reset`).
//! - [`FocusHost`] is the boundary with whatever renders the form.
//! - [`render`] produces the markup with maud.

pub mod config;
pub mod controller;
pub mod error;
pub mod error_state;
pub mod field_values;
pub mod focus;
pub mod registration;
pub mod render;
pub mod schema;
pub mod validation;
pub mod value;

// Re-export Maud for hosts that embed the form in their own templates
pub use maud::{html as maud, Markup, Render};

pub use config::FormConfig;
pub use controller::{FormController, RegistrationController, Submission};
pub use error::FormError;
pub use error_state::{FieldErrorState, FormStatus};
pub use field_values::FieldValues;
pub use focus::{FocusHost, NoFocus, RecordingFocus};
pub use registration::{registration_schema, validate_registration, Registration};
pub use render::{render_registration_form, InputField, RegistrationView};
pub use schema::{FieldKind, FieldSpec, Rule, Schema};
pub use validation::{FieldErrors, FieldValidationError, Record, ValidationResult};
pub use value::Value;
