// File: src/controller.rs
// Purpose: Submission and reset handlers owning the form's error state

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, info};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::error_state::FieldErrorState;
use crate::field_values::FieldValues;
use crate::focus::FocusHost;
use crate::registration::{registration_schema, Registration};
use crate::schema::Schema;
use crate::validation::{FieldErrors, ValidationResult};

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Submission<T> {
    /// Values passed validation; error state is now empty
    Accepted { data: T },
    /// Values failed validation; `focused` names the control that received
    /// focus, if the host had one
    Invalid {
        errors: FieldErrors,
        focused: Option<String>,
    },
}

impl<T> Submission<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

/// A form bound to a schema, holding the errors currently on display.
///
/// Only `submit` and `reset` change the error state.
pub struct FormController<'s, T> {
    schema: &'s Schema,
    config: FormConfig,
    errors: FieldErrorState,
    _output: PhantomData<fn() -> T>,
}

pub type RegistrationController = FormController<'static, Registration>;

impl<T> fmt::Debug for FormController<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.config.form.id_prefix)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<'s, T> FormController<'s, T>
where
    T: DeserializeOwned + fmt::Debug,
{
    pub fn new(schema: &'s Schema, config: FormConfig) -> Self {
        Self {
            schema,
            config,
            errors: FieldErrorState::new(),
            _output: PhantomData,
        }
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn errors(&self) -> &FieldErrorState {
        &self.errors
    }

    /// Handle a submission.
    ///
    /// Validation failures are returned as `Ok(Submission::Invalid)` after the
    /// error state is replaced and focus is moved to the first invalid field
    /// in schema order. `Err` only reports a schema that does not decode
    /// into `T`.
    pub fn submit<H>(&mut self, values: &FieldValues, host: &mut H) -> Result<Submission<T>, FormError>
    where
        H: FocusHost + ?Sized,
    {
        let values = if self.config.form.trim_values {
            Cow::Owned(values.trimmed())
        } else {
            Cow::Borrowed(values)
        };

        match self.schema.validate(&values) {
            ValidationResult::Success { data } => {
                self.errors.clear();
                let data: T = data.decode()?;
                info!(form = %self.config.form.id_prefix, "submission accepted");
                debug!(?data, "accepted values");
                Ok(Submission::Accepted { data })
            }
            ValidationResult::Failure { field_errors } => {
                self.errors.replace(&field_errors);
                let focused = self.route_focus(&field_errors, host);
                info!(
                    form = %self.config.form.id_prefix,
                    invalid = field_errors.len(),
                    "submission rejected"
                );
                Ok(Submission::Invalid {
                    errors: field_errors,
                    focused,
                })
            }
        }
    }

    /// Handle a form reset; control values are reset by the host
    pub fn reset(&mut self) {
        self.errors.clear();
        debug!(form = %self.config.form.id_prefix, "form reset");
    }

    fn route_focus<H>(&self, errors: &FieldErrors, host: &mut H) -> Option<String>
    where
        H: FocusHost + ?Sized,
    {
        let first = self.schema.field_names().find(|name| errors.contains(name))?;

        if host.focus(first) {
            Some(first.to_string())
        } else {
            // Best effort: a missing control leaves focus unchanged.
            debug!(field = first, "no control to focus");
            None
        }
    }
}

impl FormController<'static, Registration> {
    /// Controller for the registration schema
    pub fn registration(config: FormConfig) -> Self {
        Self::new(registration_schema(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{NoFocus, RecordingFocus};
    use crate::schema::FieldSpec;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Login {
        user: String,
        pin: f64,
    }

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSpec::text("user").min_length(3),
            FieldSpec::numeric("pin"),
        ])
    }

    #[test]
    fn test_accepted_clears_errors() {
        let schema = schema();
        let mut form: FormController<'_, Login> = FormController::new(&schema, FormConfig::default());

        form.submit(&FieldValues::new(), &mut NoFocus).unwrap();
        assert!(!form.errors().is_empty());

        let outcome = form
            .submit(&FieldValues::from_pairs([("user", "alice"), ("pin", "1234")]), &mut NoFocus)
            .unwrap();

        assert_eq!(
            outcome,
            Submission::Accepted {
                data: Login {
                    user: "alice".to_string(),
                    pin: 1234.0
                }
            }
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_focus_follows_schema_order() {
        let schema = schema();
        let mut form: FormController<'_, Login> = FormController::new(&schema, FormConfig::default());
        let mut host = RecordingFocus::new();

        // submitted in reverse order
        let values = FieldValues::from_pairs([("pin", "x"), ("user", "al")]);
        let outcome = form.submit(&values, &mut host).unwrap();

        assert_eq!(host.current(), Some("user"));
        assert!(matches!(outcome, Submission::Invalid { focused: Some(f), .. } if f == "user"));
    }

    #[test]
    fn test_missing_control_is_not_an_error() {
        let schema = schema();
        let mut form: FormController<'_, Login> = FormController::new(&schema, FormConfig::default());
        let mut host = RecordingFocus::with_controls(["pin"]);

        let outcome = form.submit(&FieldValues::new(), &mut host).unwrap();

        assert!(matches!(outcome, Submission::Invalid { focused: None, .. }));
        assert_eq!(host.current(), None);
        assert!(form.errors().has_error("user"));
    }

    #[test]
    fn test_trim_values_config() {
        let schema = schema();
        let mut config = FormConfig::default();
        config.form.trim_values = true;
        let mut form: FormController<'_, Login> = FormController::new(&schema, config);

        let outcome = form
            .submit(&FieldValues::from_pairs([("user", "  al  "), ("pin", "1")]), &mut NoFocus)
            .unwrap();
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_decode_mismatch_is_err() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrong {
            user: bool,
        }

        let schema = schema();
        let mut form: FormController<'_, Wrong> = FormController::new(&schema, FormConfig::default());
        let result = form.submit(&FieldValues::from_pairs([("user", "alice"), ("pin", "1")]), &mut NoFocus);

        assert!(matches!(result, Err(FormError::Decode(_))));
    }

    #[test]
    fn test_submission_serialization() {
        let outcome: Submission<Login> = Submission::Invalid {
            errors: FieldErrors::new(),
            focused: None,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({ "status": "invalid", "errors": {}, "focused": null })
        );
    }
}
