// File: src/config.rs
// Purpose: Configuration parsing from register-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub render: RenderSettings,
}

/// Submission behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSettings {
    /// Prefix for control ids (`{id_prefix}-fname`)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Value of the form's `autocomplete` attribute
    #[serde(default = "default_false")]
    pub autocomplete: bool,

    /// Trim surrounding whitespace from values before validating
    #[serde(default = "default_false")]
    pub trim_values: bool,
}

/// Markup options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderSettings {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_id_prefix() -> String {
    "register".to_string()
}

fn default_title() -> String {
    "Register".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            autocomplete: false,
            trim_values: false,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./register-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("register-form.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form.id_prefix, "register");
        assert!(!config.form.autocomplete);
        assert!(!config.form.trim_values);
        assert_eq!(config.render.title, "Register");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormConfig>("").unwrap_or_default();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [form]
            trim_values = true

            [render]
            title = "Sign up"
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert!(config.form.trim_values);
        assert_eq!(config.form.id_prefix, "register");
        assert_eq!(config.render.title, "Sign up");
    }

    #[test]
    fn test_load_missing_file() {
        let config = FormConfig::load("does-not-exist/register-form.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("register-form-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("register-form.toml");
        fs::write(&path, "[form]\nid_prefix = \"signup\"\n").unwrap();

        let config = FormConfig::load(&path).unwrap();
        assert_eq!(config.form.id_prefix, "signup");

        fs::write(&path, "[form\n").unwrap();
        let err = FormConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
