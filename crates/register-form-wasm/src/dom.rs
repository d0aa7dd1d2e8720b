//! DOM side of the host boundary: reading a `<form>` and focusing controls

use register_form::{FieldValues, FocusHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlElement, HtmlFormElement};

/// Read the successful controls of a form, in document order.
///
/// File inputs are skipped; only string entries become field values.
pub fn read_form(form: &HtmlFormElement) -> Result<FieldValues, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut values = FieldValues::new();

    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(values);
    };

    for entry in entries {
        let pair: js_sys::Array = entry?.dyn_into()?;
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            values.append(name, value);
        }
    }

    Ok(values)
}

/// Focuses controls inside one form by their `name` attribute
pub struct DomFocus<'a> {
    form: &'a HtmlFormElement,
}

impl<'a> DomFocus<'a> {
    pub fn new(form: &'a HtmlFormElement) -> Self {
        Self { form }
    }
}

impl FocusHost for DomFocus<'_> {
    fn focus(&mut self, field: &str) -> bool {
        let selector = format!("[name='{}']", field);

        let element = match self.form.query_selector(&selector) {
            Ok(Some(element)) => element,
            _ => return false,
        };

        match element.dyn_into::<HtmlElement>() {
            Ok(control) => control.focus().is_ok(),
            Err(_) => false,
        }
    }
}
