//! Register Form WASM
//!
//! WebAssembly bindings for the registration form. The browser hands over
//! its `<form>`; validation, error state and focus routing run in Rust with
//! the same schema the server uses.

use register_form::{
    registration_schema, FieldValues, FormConfig, RegistrationController, RegistrationView,
    Render,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

mod dom;

pub use dom::{read_form, DomFocus};

/// Set panic hook and tracing output for the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A host page may already have installed a subscriber.
    let _ = tracing_wasm::try_set_as_global_default();
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Validate plain form values
///
/// # Arguments
/// * `values` - object of field name to string, number, boolean or array
///
/// # Returns
/// `{ success: true, data }` or `{ success: false, fieldErrors }`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateRegistration({ fname: 'Al', password: 'secret1' });
/// // result.fieldErrors.fname -> ['Must have 5 characters']
/// ```
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(values: JsValue) -> Result<JsValue, JsValue> {
    let json: serde_json::Value = serde_wasm_bindgen::from_value(values)?;
    let values = FieldValues::from_json(&json).map_err(js_error)?;

    to_js(&registration_schema().validate(&values))
}

/// The registration form bound to one `<form>` element's lifecycle
#[wasm_bindgen]
pub struct RegisterForm {
    form_id: String,
    controller: RegistrationController,
}

#[wasm_bindgen]
impl RegisterForm {
    #[wasm_bindgen(constructor)]
    pub fn new(form_id: String) -> RegisterForm {
        let mut config = FormConfig::default();
        config.form.id_prefix = form_id.clone();

        RegisterForm {
            form_id,
            controller: RegistrationController::registration(config),
        }
    }

    /// Handle a submit event's form. Call `preventDefault()` before this.
    ///
    /// Returns `{ status: "accepted", data }` or
    /// `{ status: "invalid", errors, focused }`.
    pub fn submit(&mut self, form: &HtmlFormElement) -> Result<JsValue, JsValue> {
        let values = read_form(form)?;
        tracing::debug!(form = %self.form_id, entries = values.len(), "read form values");
        let mut focus = DomFocus::new(form);

        let outcome = self
            .controller
            .submit(&values, &mut focus)
            .map_err(js_error)?;

        to_js(&outcome)
    }

    /// Handle the form's reset event
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Current errors as `{ field: [messages] }`
    #[wasm_bindgen(js_name = fieldErrors)]
    pub fn field_errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.controller.errors().as_map())
    }

    /// Markup for the whole form with the current errors
    pub fn render(&self) -> String {
        RegistrationView {
            form_id: &self.form_id,
            errors: self.controller.errors(),
            values: &FieldValues::new(),
            config: self.controller.config(),
        }
        .render()
        .into_string()
    }
}
