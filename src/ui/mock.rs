//! Mock UI implementation for testing.
//!
//! # Example
//!
//! ```
//! use app_audit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("app_name: Foo.app");
//! ui.error("Invalid configuration");
//!
//! assert!(ui.has_message("Foo.app"));
//! assert_eq!(ui.errors().len(), 1);
//! ```

use super::{OutputMode, UserInterface};

/// Captures all UI interactions for later assertion.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Messages shown so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Warnings shown so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors shown so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
