//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage, with spinners
//! - [`NonInteractiveUI`] for CI, pipes and redirected output
//! - [`MockUI`] which records everything for assertions
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Setup Verification");
//! ui.success("Environment ready");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::ResultsTable;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvcheckTheme};

use crate::checks::CheckResult;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Start a spinner for a running check.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show an item-level finding under the current check (verbose only).
    fn show_finding(&mut self, kind: StatusKind, msg: &str);

    /// Show the detailed results table.
    fn show_results_table(&mut self, results: &[CheckResult]);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Finish with a check that passed.
    fn finish_success(&mut self, msg: &str);

    /// Finish with a check that failed.
    fn finish_error(&mut self, msg: &str);

    /// Finish with a warning.
    fn finish_warning(&mut self, msg: &str);

    /// Finish with an informational result, or no result at all.
    fn finish_info(&mut self, msg: &str);

    /// Finish according to a status kind.
    fn finish(&mut self, kind: StatusKind, msg: &str) {
        match kind {
            StatusKind::Success => self.finish_success(msg),
            StatusKind::Failed => self.finish_error(msg),
            StatusKind::Warning => self.finish_warning(msg),
            StatusKind::Info => self.finish_info(msg),
        }
    }
}
