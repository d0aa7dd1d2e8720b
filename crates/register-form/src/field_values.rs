// File: src/field_values.rs
// Purpose: Raw submitted form values, in submission order

use serde_json::Value as JsonValue;

use crate::error::FormError;
use register_form_validation::CHECKBOX_ON;

/// Raw values of a form submission.
///
/// Mirrors browser `FormData`: an ordered multimap where a name may repeat
/// (checkbox groups) and unchecked boxes are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, String)>,
}

impl FieldValues {
    /// Create empty field values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(name, value)` pairs, keeping their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Result<Self, FormError> {
        let mut values = Self::new();

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            values.append(decode_component(name)?, decode_component(value)?);
        }

        Ok(values)
    }

    /// Create from a JSON object.
    ///
    /// Strings and numbers become single entries, arrays become repeated
    /// entries, `true` becomes a checked checkbox and `false`/`null` are
    /// treated as not submitted.
    pub fn from_json(json: &JsonValue) -> Result<Self, FormError> {
        let JsonValue::Object(map) = json else {
            return Err(FormError::NotAnObject);
        };

        let mut values = Self::new();
        for (name, value) in map {
            match value {
                JsonValue::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(name, item)? {
                            values.append(name.clone(), text);
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(name, other)? {
                        values.append(name.clone(), text);
                    }
                }
            }
        }

        Ok(values)
    }

    /// Append a value for `name` after any existing ones
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Get the first value submitted for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get every value submitted for `name`, in submission order
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if any value was submitted for `name`
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Distinct field names, in order of first appearance
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (k, _) in &self.entries {
            if !names.contains(&k.as_str()) {
                names.push(k);
            }
        }
        names
    }

    /// Number of entries, counting repeats
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy with surrounding whitespace removed from every value
    pub fn trimmed(&self) -> Self {
        self.iter().map(|(k, v)| (k, v.trim())).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

fn decode_component(raw: &str) -> Result<String, FormError> {
    let spaced = raw.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}

fn scalar_text(name: &str, value: &JsonValue) -> Result<Option<String>, FormError> {
    match value {
        JsonValue::Null | JsonValue::Bool(false) => Ok(None),
        JsonValue::Bool(true) => Ok(Some(CHECKBOX_ON.to_string())),
        JsonValue::String(s) => Ok(Some(s.clone())),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(FormError::UnsupportedValue {
            field: name.to_string(),
        }),
    }
}
