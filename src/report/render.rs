//! Human-readable run summary.

use chrono::{DateTime, Utc};
use std::path::Path;

use super::VerificationReport;
use crate::ui::UserInterface;

const NEXT_STEPS_FAILED: [&str; 3] = [
    "Fix the failed checks listed above",
    "Re-run envcheck",
    "Contact your instructor if you need help",
];

const NEXT_STEPS_READY: [&str; 3] = [
    "Start with Module 01 - Fundamentals",
    "Read the course README.md for detailed instructions",
    "Join the course discussion forum",
];

/// The numbered follow-up list shown at the end of a run.
pub fn next_steps(has_failures: bool) -> &'static [&'static str] {
    if has_failures {
        &NEXT_STEPS_FAILED
    } else {
        &NEXT_STEPS_READY
    }
}

/// Print the banner shown before any check runs.
pub fn render_banner(
    ui: &mut dyn UserInterface,
    platform: &str,
    interpreter: &str,
    timestamp: DateTime<Utc>,
) {
    ui.show_header("Setup Verification");
    if ui.output_mode().shows_progress() {
        ui.message(&format!("Platform:    {}", platform));
        ui.message(&format!("Interpreter: {}", interpreter));
        ui.message(&format!("Started:     {}", timestamp.format("%Y-%m-%d %H:%M:%S UTC")));
        ui.message("");
    }
}

/// Print counts, verdict, results table, report location and next steps.
///
/// `saved_to` is the report path when the report was written.
pub fn render_summary(
    ui: &mut dyn UserInterface,
    report: &VerificationReport,
    saved_to: Option<&Path>,
) {
    let summary = report.summary;
    let failed = summary.failed > 0;

    ui.show_header("Setup Verification Summary");
    ui.message(&format!("Passed:   {}", summary.passed));
    ui.message(&format!("Failed:   {}", summary.failed));
    ui.message(&format!("Warnings: {}", summary.warnings));
    ui.message("");

    if failed {
        ui.message("✗ Please fix the failed checks before starting the course.");
    } else {
        ui.success("Congratulations! Your development environment is ready for the course.");
    }

    let details = ui.output_mode().shows_details();
    if details {
        ui.message("");
        ui.message("Detailed Results:");
    }
    ui.show_results_table(&report.results);

    if let Some(path) = saved_to {
        ui.info(&format!("Detailed report saved to: {}", path.display()));
    }

    if details {
        ui.message("");
        ui.message("Next Steps:");
        for (i, step) in next_steps(failed).iter().enumerate() {
            ui.message(&format!("{}. {}", i + 1, step));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::runner::ResultAggregator;
    use crate::ui::{MockUI, OutputMode};

    fn report(status: CheckStatus) -> VerificationReport {
        let mut agg = ResultAggregator::new();
        agg.record_result("Python Version", CheckStatus::Pass, "ok");
        agg.record_result("Environment Files", status, "details");
        VerificationReport::new(&agg, "linux x86_64", "3.12.1")
    }

    #[test]
    fn failing_run_asks_for_fixes() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &report(CheckStatus::Fail), None);
        assert!(ui.has_message("Please fix the failed checks"));
        assert!(ui.errors().is_empty());
        assert!(ui.has_message("Failed:   1"));
        assert!(ui.has_message("1. Fix the failed checks listed above"));
    }

    #[test]
    fn passing_run_congratulates() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &report(CheckStatus::Warning), None);
        assert!(ui.has_success("Congratulations"));
        assert!(ui.has_message("Warnings: 1"));
        assert!(ui.has_message("1. Start with Module 01"));
    }

    #[test]
    fn table_lists_every_result() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &report(CheckStatus::Pass), None);
        assert_eq!(ui.tables()[0].len(), 2);
    }

    #[test]
    fn report_path_is_announced() {
        let mut ui = MockUI::new();
        render_summary(
            &mut ui,
            &report(CheckStatus::Pass),
            Some(Path::new("setup-verification-report.json")),
        );
        assert!(ui
            .infos()
            .iter()
            .any(|m| m.contains("setup-verification-report.json")));
    }

    #[test]
    fn quiet_mode_skips_next_steps() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        render_summary(&mut ui, &report(CheckStatus::Pass), None);
        assert!(ui.has_message("Passed:   2"));
        assert!(!ui.has_message("Next Steps"));
    }

    #[test]
    fn banner_shows_platform() {
        let mut ui = MockUI::new();
        render_banner(&mut ui, "linux x86_64", "Python 3.12.1", Utc::now());
        assert!(ui.has_message("linux x86_64"));
        assert_eq!(ui.headers(), &["Setup Verification".to_string()]);
    }
}
