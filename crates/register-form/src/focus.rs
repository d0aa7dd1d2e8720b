// File: src/focus.rs
// Purpose: Focus-management boundary with the rendering host

use std::collections::HashSet;

/// Moves input focus to a form control by field name.
///
/// Implemented by whatever hosts the rendered form (a DOM, a test double).
pub trait FocusHost {
    /// Focus the control named `field`. Returns `false` when no such control
    /// exists; callers treat that as "leave focus where it is".
    fn focus(&mut self, field: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> FocusHost for F {
    fn focus(&mut self, field: &str) -> bool {
        self(field)
    }
}

/// Host without focusable controls, e.g. server-side rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFocus;

impl FocusHost for NoFocus {
    fn focus(&mut self, _field: &str) -> bool {
        false
    }
}

/// Host that records focus requests.
///
/// With `with_controls` only the listed names exist; otherwise every name is
/// treated as present.
#[derive(Debug, Clone, Default)]
pub struct RecordingFocus {
    controls: Option<HashSet<String>>,
    focused: Vec<String>,
}

impl RecordingFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_controls<I, S>(controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            controls: Some(controls.into_iter().map(Into::into).collect()),
            focused: Vec::new(),
        }
    }

    /// The control that currently holds focus
    pub fn current(&self) -> Option<&str> {
        self.focused.last().map(String::as_str)
    }

    /// Every successful focus, oldest first
    pub fn history(&self) -> &[String] {
        &self.focused
    }
}

impl FocusHost for RecordingFocus {
    fn focus(&mut self, field: &str) -> bool {
        let present = self
            .controls
            .as_ref()
            .map_or(true, |controls| controls.contains(field));

        if present {
            self.focused.push(field.to_string());
        }
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_focus_any_control() {
        let mut host = RecordingFocus::new();
        assert!(host.focus("fname"));
        assert!(host.focus("gender"));
        assert_eq!(host.current(), Some("gender"));
        assert_eq!(host.history().len(), 2);
    }

    #[test]
    fn test_recording_focus_missing_control() {
        let mut host = RecordingFocus::with_controls(["fname"]);
        assert!(!host.focus("gender"));
        assert_eq!(host.current(), None);
    }

    #[test]
    fn test_closure_host() {
        let mut seen = Vec::new();
        let mut host = |field: &str| {
            seen.push(field.to_string());
            true
        };
        assert!(host.focus("password"));
        assert_eq!(seen, vec!["password"]);
    }

    #[test]
    fn test_no_focus() {
        assert!(!NoFocus.focus("fname"));
    }
}
