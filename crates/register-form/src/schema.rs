// File: src/schema.rs
// Purpose: Declarative field schema and validation of raw values against it

use register_form_validation::{
    coerce_checkbox, coerce_number, present_text, validate_min_length, REQUIRED_MESSAGE,
};
use tracing::debug;

use crate::field_values::FieldValues;
use crate::validation::{FieldErrors, FieldValidationError, Record, ValidationResult};
use crate::value::Value;

/// Primitive kind of a field and how its raw value is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single text value; empty counts as not submitted
    Text,
    /// Text coerced to a number
    Numeric,
    /// Checkbox presence coerced to a boolean
    Checkbox,
    /// Zero or more text values under one name
    Repeatable,
}

/// A constraint checked against present text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    MinLength { min: usize, message: Option<String> },
}

impl Rule {
    fn check(&self, text: &str) -> Result<(), String> {
        match self {
            Rule::MinLength { min, message } => {
                validate_min_length(text, *min).map_err(|default| message.clone().unwrap_or(default))
            }
        }
    }
}

/// Declaration of one named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    label: Option<String>,
    kind: FieldKind,
    required: bool,
    rules: Vec<Rule>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            required,
            rules: Vec::new(),
        }
    }

    /// Required text field
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text, true)
    }

    /// Required numeric field
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Numeric, true)
    }

    /// Checkbox; never required, absence means `false`
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox, false)
    }

    /// Repeated text; zero or more values
    pub fn repeatable(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Repeatable, false)
    }

    /// Accept a missing value as `null`
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Minimum length with the default message
    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(Rule::MinLength { min, message: None });
        self
    }

    /// Minimum length with a custom message
    pub fn min_length_msg(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLength {
            min,
            message: Some(message.into()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label, falling back to the field name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Largest minimum length among the rules, for the `minlength` attribute
    pub fn min_len(&self) -> Option<usize> {
        self.rules
            .iter()
            .map(|rule| match rule {
                Rule::MinLength { min, .. } => *min,
            })
            .max()
    }

    /// Coerce this field's raw value(s), or collect its messages
    pub fn coerce(&self, values: &FieldValues) -> Result<Value, Vec<String>> {
        match self.kind {
            FieldKind::Text => match present_text(values.get(&self.name)) {
                Some(text) => {
                    self.check_rules(text)?;
                    Ok(Value::Text(text.to_string()))
                }
                None => self.missing(),
            },
            FieldKind::Numeric => match present_text(values.get(&self.name)) {
                Some(text) => coerce_number(text).map(Value::Number).map_err(|m| vec![m]),
                None => self.missing(),
            },
            FieldKind::Checkbox => coerce_checkbox(values.get(&self.name))
                .map(Value::Bool)
                .map_err(|m| vec![m]),
            FieldKind::Repeatable => {
                let items = values.get_all(&self.name);
                if items.iter().any(|item| item.is_empty()) {
                    return Err(vec![REQUIRED_MESSAGE.to_string()]);
                }

                let mut messages: Vec<String> = Vec::new();
                for item in &items {
                    if let Err(item_messages) = self.check_rules(item) {
                        for message in item_messages {
                            if !messages.contains(&message) {
                                messages.push(message);
                            }
                        }
                    }
                }
                if !messages.is_empty() {
                    return Err(messages);
                }

                Ok(Value::List(items.into_iter().map(String::from).collect()))
            }
        }
    }

    fn missing(&self) -> Result<Value, Vec<String>> {
        if self.required {
            Err(vec![REQUIRED_MESSAGE.to_string()])
        } else {
            Ok(Value::Null)
        }
    }

    fn check_rules(&self, text: &str) -> Result<(), Vec<String>> {
        let messages: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(text).err())
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }
}

/// An ordered set of field declarations.
///
/// Declaration order is significant: errors are reported and focus is routed
/// in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validate raw values.
    ///
    /// Pure: no state, no I/O. Every field is checked so the failure lists
    /// all invalid fields at once.
    pub fn validate(&self, values: &FieldValues) -> ValidationResult<Record> {
        let mut record = Record::with_capacity(self.fields.len());
        let mut errors = FieldErrors::new();

        for spec in &self.fields {
            match spec.coerce(values) {
                Ok(value) => record.insert(spec.name.clone(), value),
                Err(messages) => errors.push(FieldValidationError::new(spec.name.clone(), messages)),
            }
        }

        if errors.is_empty() {
            debug!(fields = record.len(), "validation passed");
            ValidationResult::Success { data: record }
        } else {
            debug!(invalid = ?errors.fields().collect::<Vec<_>>(), "validation failed");
            ValidationResult::Failure {
                field_errors: errors,
            }
        }
    }
}

impl FromIterator<FieldSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
