// File: src/render.rs
// Purpose: Maud markup for form fields and the registration page

use maud::{html, Markup, Render};

use crate::config::FormConfig;
use crate::error_state::FieldErrorState;
use crate::field_values::FieldValues;
use crate::registration::registration_schema;
use crate::schema::{FieldSpec, Schema};
use register_form_validation::CHECKBOX_ON;

const QUALIFICATIONS: &[(&str, &str)] = &[
    ("graduation", "Graduation"),
    ("post-grad", "Post Grad"),
    ("phd", "PHD"),
];

const GENDERS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("transgender", "Transgender"),
];

const COURSES: &[(&str, &str)] = &[
    ("html", "HTML"),
    ("css", "CSS"),
    ("javascript", "Javascript"),
];

/// A labelled `<input>`.
///
/// Block fields show their error text in a `<p>` under the control. Inline
/// fields (radio and checkbox groups) never do.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    id: String,
    name: String,
    label: String,
    input_type: Option<String>,
    value: Option<String>,
    required: bool,
    min_length: Option<usize>,
    min: Option<String>,
    max: Option<String>,
    checked: bool,
    inline: bool,
    error: Option<String>,
}

impl InputField {
    pub fn new(id: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Copy `required` and `minlength` from a schema field
    pub fn for_spec(mut self, spec: &FieldSpec) -> Self {
        self.required = spec.is_required();
        self.min_length = spec.min_len();
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min(mut self, min: impl ToString) -> Self {
        self.min = Some(min.to_string());
        self
    }

    pub fn max(mut self, max: impl ToString) -> Self {
        self.max = Some(max.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    fn visible_error(&self) -> Option<&str> {
        if self.inline {
            return None;
        }
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

impl Render for InputField {
    fn render(&self) -> Markup {
        let class = if self.inline { "fgroup infield" } else { "fgroup" };

        html! {
            div class=(class) {
                label for=(self.id) { (self.label) }
                input
                    id=(self.id)
                    type=[self.input_type.as_deref()]
                    name=(self.name)
                    value=[self.value.as_deref()]
                    required[self.required]
                    minlength=[self.min_length]
                    min=[self.min.as_deref()]
                    max=[self.max.as_deref()]
                    checked[self.checked];
                @if let Some(error) = self.visible_error() {
                    p { (error) }
                }
            }
        }
    }
}

/// The registration page: heading plus the full form.
///
/// `values` re-populates controls after a server-side round trip; passwords
/// are never echoed back.
pub struct RegistrationView<'a> {
    pub form_id: &'a str,
    pub errors: &'a FieldErrorState,
    pub values: &'a FieldValues,
    pub config: &'a FormConfig,
}

impl RegistrationView<'_> {
    fn id(&self, name: &str) -> String {
        format!("{}-{}", self.form_id, name)
    }

    fn block_field(&self, schema: &Schema, name: &str) -> InputField {
        let mut field = InputField::new(self.id(name), name, label_of(schema, name))
            .error(self.errors.error_text(name));
        if let Some(spec) = schema.field(name) {
            field = field.for_spec(spec);
        }
        field
    }

    fn text_value(&self, name: &str) -> Option<&str> {
        self.values.get(name).filter(|v| !v.is_empty())
    }

    fn is_selected(&self, name: &str, value: &str) -> bool {
        self.values.get_all(name).contains(&value)
    }
}

impl Render for RegistrationView<'_> {
    fn render(&self) -> Markup {
        let schema = registration_schema();
        let is_required = |name: &str| schema.field(name).is_some_and(FieldSpec::is_required);
        let qualification = self.values.get("qualification");
        let autocomplete = if self.config.form.autocomplete { "on" } else { "off" };

        let mut fname = self.block_field(schema, "fname");
        if let Some(v) = self.text_value("fname") {
            fname = fname.value(v);
        }
        let mut lname = self.block_field(schema, "lname");
        if let Some(v) = self.text_value("lname") {
            lname = lname.value(v);
        }
        let password = self.block_field(schema, "password").input_type("password");
        let mut grad_age = self
            .block_field(schema, "gradAge")
            .input_type("number")
            .min(16)
            .max(32);
        if let Some(v) = self.text_value("gradAge") {
            grad_age = grad_age.value(v);
        }

        html! {
            div class="stack" {
                h1 { (self.config.render.title) }

                form id=(self.form_id) class="stack" autocomplete=(autocomplete) {
                    (fname)
                    (lname)
                    (password)
                    (grad_age)

                    div class="fgroup" {
                        label for=(self.id("address")) { (label_of(schema, "address")) }
                        textarea id=(self.id("address")) rows="3" name="address" required[is_required("address")] {
                            (self.text_value("address").unwrap_or_default())
                        }
                        @if let Some(error) = self.errors.error_text("address") {
                            p { (error) }
                        }
                    }

                    div class="fgroup" {
                        label for=(self.id("qualification")) { (label_of(schema, "qualification")) }
                        select id=(self.id("qualification")) name="qualification" required[is_required("qualification")] {
                            option value="novalue" disabled selected[qualification.is_none()] { "Please Select" }
                            @for (value, text) in QUALIFICATIONS {
                                option value=(value) selected[qualification == Some(*value)] { (text) }
                            }
                        }
                        @if let Some(error) = self.errors.error_text("qualification") {
                            p { (error) }
                        }
                    }

                    div class="fgroup inline" {
                        label { (label_of(schema, "gender")) }
                        @for (value, text) in GENDERS {
                            (InputField::new(self.id(value), "gender", *text)
                                .input_type("radio")
                                .value(*value)
                                .checked(self.is_selected("gender", value))
                                .inline(true))
                        }
                    }

                    div class="fgroup inline" {
                        label { (label_of(schema, "courses")) }
                        @for (value, text) in COURSES {
                            (InputField::new(self.id(value), "courses", *text)
                                .input_type("checkbox")
                                .value(*value)
                                .checked(self.is_selected("courses", value))
                                .inline(true))
                        }
                    }

                    div class="fgroup inline" {
                        label for=(self.id("isAdult")) { (label_of(schema, "isAdult")) }
                        input
                            type="checkbox"
                            name="isAdult"
                            id=(self.id("isAdult"))
                            checked[self.is_selected("isAdult", CHECKBOX_ON)];
                    }

                    button type="submit" { "Submit" }
                    button type="reset" { "Reset" }
                }
            }
        }
    }
}

fn label_of<'a>(schema: &'a Schema, name: &'a str) -> &'a str {
    schema.field(name).map_or(name, FieldSpec::display_label)
}

/// Render the registration page with the current errors and no values
pub fn render_registration_form(form_id: &str, errors: &FieldErrorState, config: &FormConfig) -> Markup {
    RegistrationView {
        form_id,
        errors,
        values: &FieldValues::new(),
        config,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldErrors, FieldValidationError};

    fn state(field: &str, message: &str) -> FieldErrorState {
        let errors: FieldErrors = [FieldValidationError::new(field, vec![message.to_string()])]
            .into_iter()
            .collect();
        let mut state = FieldErrorState::new();
        state.replace(&errors);
        state
    }

    #[test]
    fn test_block_field_renders_error_below_input() {
        let html = InputField::new("f-fname", "fname", "First Name")
            .required(true)
            .error(Some("Must have 5 characters".to_string()))
            .render()
            .into_string();

        assert!(html.contains(r#"<label for="f-fname">First Name</label>"#));
        assert!(html.contains(r#"<input id="f-fname" name="fname" required>"#));
        assert!(html.contains("<p>Must have 5 characters</p>"));
        assert!(html.find("<input").unwrap() < html.find("<p>").unwrap());
    }

    #[test]
    fn test_inline_field_never_renders_error() {
        let html = InputField::new("f-male", "gender", "Male")
            .input_type("radio")
            .value("male")
            .inline(true)
            .error(Some("Required".to_string()))
            .render()
            .into_string();

        assert!(html.contains(r#"class="fgroup infield""#));
        assert!(html.contains(r#"type="radio""#));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_empty_error_not_rendered() {
        let html = InputField::new("f-lname", "lname", "Last Name")
            .error(Some(String::new()))
            .render()
            .into_string();

        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_attributes_from_schema() {
        let spec = FieldSpec::text("fname").min_length(5);
        let html = InputField::new("f-fname", "fname", "First Name")
            .for_spec(&spec)
            .render()
            .into_string();

        assert!(html.contains(r#"minlength="5""#));
        assert!(html.contains("required"));
    }

    #[test]
    fn test_registration_form_pristine() {
        let html = render_registration_form("reg", &FieldErrorState::new(), &FormConfig::default())
            .into_string();

        assert!(html.contains("<h1>Register</h1>"));
        assert!(html.contains(r#"autocomplete="off""#));
        assert!(html.contains(r#"id="reg-fname""#));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"min="16""#));
        assert!(html.contains(r#"max="32""#));
        assert!(html.contains(r#"<option value="novalue" disabled selected>Please Select</option>"#));
        assert!(html.contains(r#"value="transgender""#));
        assert!(html.contains(r#"value="javascript""#));
        assert!(html.contains(r#"name="isAdult""#));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_registration_form_shows_block_errors_only() {
        let with_fname = render_registration_form(
            "reg",
            &state("fname", "Must have 5 characters"),
            &FormConfig::default(),
        )
        .into_string();
        assert!(with_fname.contains("<p>Must have 5 characters</p>"));

        let with_gender =
            render_registration_form("reg", &state("gender", "Required"), &FormConfig::default())
                .into_string();
        assert!(!with_gender.contains("<p>"));
    }

    #[test]
    fn test_registration_form_errors_under_every_block_field() {
        for field in ["gradAge", "address", "qualification"] {
            let html = render_registration_form("reg", &state(field, "Required"), &FormConfig::default())
                .into_string();
            let control = html.find(&format!(r#"id="reg-{}""#, field)).unwrap();
            let error = html.find("<p>Required</p>").unwrap();
            assert!(control < error, "{} error should follow its control", field);
        }
    }

    #[test]
    fn test_registration_view_repopulates_values() {
        let values = FieldValues::from_pairs([
            ("fname", "Alice"),
            ("password", "secret1"),
            ("qualification", "phd"),
            ("gender", "female"),
            ("courses", "css"),
            ("isAdult", "on"),
        ]);
        let html = RegistrationView {
            form_id: "reg",
            errors: &FieldErrorState::new(),
            values: &values,
            config: &FormConfig::default(),
        }
        .render()
        .into_string();

        assert!(html.contains(r#"value="Alice""#));
        assert!(!html.contains("secret1"));
        assert!(html.contains(r#"<option value="phd" selected>PHD</option>"#));
        assert!(html.contains(r#"value="female" checked"#));
        assert!(html.contains(r#"value="css" checked"#));
        assert!(html.contains(r#"id="reg-isAdult" checked"#));
        assert!(!html.contains(r#"value="male" checked"#));
    }
}
