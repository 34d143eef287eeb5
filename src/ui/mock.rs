//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and records every interaction
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting verification");
//! ui.success("All checks passed");
//!
//! assert!(ui.has_message("Starting"));
//! assert!(ui.has_success("passed"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};
use crate::checks::CheckResult;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    findings: Vec<(StatusKind, String)>,
    tables: Vec<Vec<CheckResult>>,
    finished: Rc<RefCell<Vec<(StatusKind, String)>>>,
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

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Findings that were shown (respecting the output mode).
    pub fn findings(&self) -> &[(StatusKind, String)] {
        &self.findings
    }

    /// Every results table that was shown.
    pub fn tables(&self) -> &[Vec<CheckResult>] {
        &self.tables
    }

    /// How each spinner finished, in order.
    pub fn finished_spinners(&self) -> Vec<(StatusKind, String)> {
        self.finished.borrow().clone()
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finished: Rc::clone(&self.finished),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_finding(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_findings() {
            self.findings.push((kind, msg.to_string()));
        }
    }

    fn show_results_table(&mut self, results: &[CheckResult]) {
        self.tables.push(results.to_vec());
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner handed out by [`MockUI`]; records how it finished.
#[derive(Debug)]
pub struct MockSpinner {
    finished: Rc<RefCell<Vec<(StatusKind, String)>>>,
}

impl MockSpinner {
    fn record(&self, kind: StatusKind, msg: &str) {
        self.finished.borrow_mut().push((kind, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.record(StatusKind::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(StatusKind::Failed, msg);
    }

    fn finish_warning(&mut self, msg: &str) {
        self.record(StatusKind::Warning, msg);
    }

    fn finish_info(&mut self, msg: &str) {
        self.record(StatusKind::Info, msg);
    }
}
