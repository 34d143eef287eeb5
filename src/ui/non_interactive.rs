//! Non-interactive UI for CI and piped output.

use super::theme::EnvcheckTheme;
use super::{OutputMode, ResultsTable, SpinnerHandle, StatusKind, UserInterface};
use crate::checks::CheckResult;

/// Plain-text UI: no spinners, no colors, bracketed status labels.
///
/// Each check prints one line once it finishes, so CI logs stay readable.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("ℹ {}", msg);
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LineSpinner {
            visible: self.mode.shows_progress(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", EnvcheckTheme::plain().format_header(title));
        }
    }

    fn show_finding(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_findings() {
            println!("      {}", kind.format_plain(msg));
        }
    }

    fn show_results_table(&mut self, results: &[CheckResult]) {
        if self.mode.shows_details() {
            println!(
                "{}",
                ResultsTable::new(results).render(&EnvcheckTheme::plain())
            );
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Prints a single bracketed line when the check finishes.
struct LineSpinner {
    visible: bool,
}

impl LineSpinner {
    fn finish_line(&self, kind: StatusKind, msg: &str) {
        if self.visible {
            println!("  {}", kind.format_plain(msg));
        }
    }
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.finish_line(StatusKind::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_line(StatusKind::Failed, msg);
    }

    fn finish_warning(&mut self, msg: &str) {
        self.finish_line(StatusKind::Warning, msg);
    }

    fn finish_info(&mut self, msg: &str) {
        self.finish_line(StatusKind::Info, msg);
    }
}
