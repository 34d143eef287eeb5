//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, EnvcheckTheme, NonInteractiveUI, OutputMode, ProgressSpinner, ResultsTable,
    SpinnerHandle, StatusKind, UserInterface,
};
use crate::checks::CheckResult;

/// Terminal UI with colors and spinners.
pub struct TerminalUI {
    term: Term,
    theme: EnvcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvcheckTheme::new()
        } else {
            EnvcheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        writeln!(Term::stderr(), "{}", line).ok();
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_finding(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_findings() {
            writeln!(self.term, "      {}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn show_results_table(&mut self, results: &[CheckResult]) {
        if self.mode.shows_details() {
            let table = ResultsTable::new(results);
            writeln!(self.term, "{}", table.render(&self.theme)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
