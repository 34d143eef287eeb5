//! Check execution.
//!
//! [`VerificationRunner`] runs a [`CheckPlan`] in order, shows progress
//! through the UI and records each verdict in a [`ResultAggregator`].
//! A check that errors or panics is recorded as FAIL; the run continues.

pub mod aggregator;

pub use aggregator::{ResultAggregator, Summary};

use std::panic::{self, AssertUnwindSafe};

use crate::checks::{Check, CheckContext, CheckOutcome, CheckPlan, CheckStatus};
use crate::error::{EnvcheckError, Result};
use crate::ui::{StatusKind, UserInterface};

/// Runs every check of a plan.
pub struct VerificationRunner<'a> {
    plan: &'a CheckPlan,
}

impl<'a> VerificationRunner<'a> {
    pub fn new(plan: &'a CheckPlan) -> Self {
        Self { plan }
    }

    /// Run all checks in plan order and return their results.
    pub fn run_all_checks(
        &self,
        ctx: &CheckContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> ResultAggregator {
        let mut aggregator = ResultAggregator::new();
        let total = self.plan.len();

        for (index, check) in self.plan.checks().iter().enumerate() {
            let category = check.category();
            tracing::debug!("[{}/{}] Running check '{}'", index + 1, total, check.kind());

            let mut spinner = ui.start_spinner(&format!("Checking {}...", category));
            let outcome = match run_guarded(check.as_ref(), ctx) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Check '{}' faulted: {}", check.kind(), e);
                    CheckOutcome::new(CheckStatus::Fail, e.to_string())
                }
            };

            match &outcome.verdict {
                Some(verdict) => {
                    spinner.finish(
                        StatusKind::from(verdict.status),
                        &format!("{}: {}", category, verdict.details),
                    );
                    aggregator.record_result(category, verdict.status, verdict.details.clone());
                }
                None => {
                    spinner.finish_info(&format!("{}: not applicable", category));
                }
            }

            for finding in &outcome.findings {
                ui.show_finding(StatusKind::from(finding.status), &finding.message);
            }
        }

        tracing::debug!(
            "Checks complete: {} passed, {} failed, {} warnings",
            aggregator.passed(),
            aggregator.failed(),
            aggregator.warnings()
        );
        aggregator
    }
}

/// Run one check, converting a panic into an error.
fn run_guarded(check: &dyn Check, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
    match panic::catch_unwind(AssertUnwindSafe(|| check.run(ctx))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panicked".to_string());
            Err(EnvcheckError::UnexpectedFault {
                check: check.category().to_string(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckKind, Finding};
    use crate::probe::testing::{FakeNetwork, FakeRunner};
    use crate::ui::{MockUI, OutputMode};

    struct Fixed {
        category: &'static str,
        status: Option<CheckStatus>,
    }

    impl Check for Fixed {
        fn kind(&self) -> CheckKind {
            CheckKind::Structure
        }

        fn category(&self) -> &str {
            self.category
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
            Ok(match self.status {
                Some(status) => CheckOutcome::new(status, format!("{} details", self.category))
                    .with_findings(vec![Finding::info(format!("{} finding", self.category))]),
                None => CheckOutcome::silent(),
            })
        }
    }

    struct Broken;

    impl Check for Broken {
        fn kind(&self) -> CheckKind {
            CheckKind::Dependencies
        }

        fn category(&self) -> &str {
            "Broken"
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
            Err(EnvcheckError::Other(anyhow::anyhow!("manifest vanished")))
        }
    }

    struct Panicky;

    impl Check for Panicky {
        fn kind(&self) -> CheckKind {
            CheckKind::Network
        }

        fn category(&self) -> &str {
            "Panicky"
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
            panic!("probe exploded")
        }
    }

    fn fixed(category: &'static str, status: Option<CheckStatus>) -> Box<dyn Check> {
        Box::new(Fixed { category, status })
    }

    fn run(checks: Vec<Box<dyn Check>>, ui: &mut MockUI) -> ResultAggregator {
        let plan = CheckPlan::from_checks(checks).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new();
        let network = FakeNetwork::new();
        let env = |_: &str| -> Option<String> { None };
        let ctx = CheckContext {
            project_root: dir.path(),
            runner: &runner,
            network: &network,
            env: &env,
        };
        VerificationRunner::new(&plan).run_all_checks(&ctx, ui)
    }

    #[test]
    fn records_in_plan_order() {
        let mut ui = MockUI::new();
        let agg = run(
            vec![
                fixed("One", Some(CheckStatus::Pass)),
                fixed("Two", Some(CheckStatus::Warning)),
                fixed("Three", Some(CheckStatus::Info)),
            ],
            &mut ui,
        );
        let categories: Vec<_> = agg.results().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["One", "Two", "Three"]);
        assert_eq!(agg.passed(), 1);
        assert_eq!(agg.warnings(), 1);
        assert_eq!(ui.spinners().len(), 3);
    }

    #[test]
    fn silent_check_records_nothing() {
        let mut ui = MockUI::new();
        let agg = run(vec![fixed("Quiet", None)], &mut ui);
        assert!(agg.results().is_empty());
        assert_eq!(ui.finished_spinners()[0].0, StatusKind::Info);
    }

    #[test]
    fn error_becomes_fail_and_run_continues() {
        let mut ui = MockUI::new();
        let agg = run(
            vec![Box::new(Broken), fixed("After", Some(CheckStatus::Pass))],
            &mut ui,
        );
        let broken = agg.get("Broken").unwrap();
        assert_eq!(broken.status, CheckStatus::Fail);
        assert!(broken.details.contains("manifest vanished"));
        assert_eq!(agg.get("After").unwrap().status, CheckStatus::Pass);
        assert_eq!(agg.exit_code(), 1);
    }

    #[test]
    fn panic_becomes_fail_and_run_continues() {
        let mut ui = MockUI::new();
        let agg = run(
            vec![Box::new(Panicky), fixed("After", Some(CheckStatus::Pass))],
            &mut ui,
        );
        let panicky = agg.get("Panicky").unwrap();
        assert_eq!(panicky.status, CheckStatus::Fail);
        assert!(panicky.details.contains("probe exploded"));
        assert_eq!(agg.results().len(), 2);
    }

    #[test]
    fn unrelated_checks_do_not_affect_each_other() {
        let mut ui = MockUI::new();
        let alone = run(vec![fixed("Target", Some(CheckStatus::Warning))], &mut ui);
        let mixed = run(
            vec![
                Box::new(Broken),
                fixed("Other", Some(CheckStatus::Fail)),
                fixed("Target", Some(CheckStatus::Warning)),
            ],
            &mut ui,
        );
        assert_eq!(alone.get("Target"), mixed.get("Target"));
    }

    #[test]
    fn findings_shown_in_verbose_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        run(vec![fixed("One", Some(CheckStatus::Pass))], &mut ui);
        assert_eq!(
            ui.findings(),
            &[(StatusKind::Info, "One finding".to_string())]
        );
    }
}
