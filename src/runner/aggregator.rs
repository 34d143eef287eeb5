//! Result accumulation.

use serde::{Deserialize, Serialize};

use crate::checks::{CheckResult, CheckStatus};

/// Pass/fail/warning counts. INFO results are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

/// Ordered results of one run plus their counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultAggregator {
    results: Vec<CheckResult>,
    summary: Summary,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an aggregator by recording `results` in order.
    pub fn from_results(results: impl IntoIterator<Item = CheckResult>) -> Self {
        let mut aggregator = Self::new();
        for result in results {
            aggregator.record(result);
        }
        aggregator
    }

    /// Append a result and bump the matching counter.
    pub fn record_result(
        &mut self,
        category: impl Into<String>,
        status: CheckStatus,
        details: impl Into<String>,
    ) {
        self.record(CheckResult::new(category, status, details));
    }

    fn record(&mut self, result: CheckResult) {
        match result.status {
            CheckStatus::Pass => self.summary.passed += 1,
            CheckStatus::Fail => self.summary.failed += 1,
            CheckStatus::Warning => self.summary.warnings += 1,
            CheckStatus::Info => {}
        }
        self.results.push(result);
    }

    /// Results in recording order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn passed(&self) -> usize {
        self.summary.passed
    }

    pub fn failed(&self) -> usize {
        self.summary.failed
    }

    pub fn warnings(&self) -> usize {
        self.summary.warnings
    }

    /// Number of uncounted (INFO) results.
    pub fn info_count(&self) -> usize {
        self.results.len() - (self.summary.passed + self.summary.failed + self.summary.warnings)
    }

    /// Find the result recorded under `category`.
    pub fn get(&self, category: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.category == category)
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    /// Process exit code: 1 iff anything failed.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_status() {
        let mut agg = ResultAggregator::new();
        agg.record_result("A", CheckStatus::Pass, "ok");
        agg.record_result("B", CheckStatus::Fail, "no");
        agg.record_result("C", CheckStatus::Warning, "hmm");
        agg.record_result("D", CheckStatus::Info, "fyi");

        assert_eq!(
            agg.summary(),
            Summary {
                passed: 1,
                failed: 1,
                warnings: 1
            }
        );
        assert_eq!(agg.results().len(), 4);
        assert_eq!(agg.info_count(), 1);
    }

    #[test]
    fn counted_never_exceeds_total() {
        let statuses = [
            CheckStatus::Info,
            CheckStatus::Pass,
            CheckStatus::Info,
            CheckStatus::Warning,
            CheckStatus::Fail,
            CheckStatus::Info,
        ];
        let mut agg = ResultAggregator::new();
        for (i, status) in statuses.iter().enumerate() {
            agg.record_result(format!("Check {}", i), *status, "");
            let s = agg.summary();
            let counted = s.passed + s.failed + s.warnings;
            assert!(counted <= agg.results().len());
            assert_eq!(agg.results().len() - counted, agg.info_count());
        }
        assert_eq!(agg.info_count(), 3);
    }

    #[test]
    fn exit_code_is_one_iff_failure() {
        let mut agg = ResultAggregator::new();
        agg.record_result("A", CheckStatus::Warning, "");
        agg.record_result("B", CheckStatus::Info, "");
        assert_eq!(agg.exit_code(), 0);
        agg.record_result("C", CheckStatus::Fail, "");
        assert_eq!(agg.exit_code(), 1);
    }

    #[test]
    fn preserves_recording_order() {
        let mut agg = ResultAggregator::new();
        agg.record_result("second", CheckStatus::Pass, "");
        agg.record_result("first", CheckStatus::Pass, "");
        let order: Vec<_> = agg.results().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["second", "first"]);
    }

    #[test]
    fn from_results_recounts() {
        let results = vec![
            CheckResult::new("A", CheckStatus::Fail, "x"),
            CheckResult::new("B", CheckStatus::Fail, "y"),
        ];
        let agg = ResultAggregator::from_results(results);
        assert_eq!(agg.failed(), 2);
        assert!(agg.get("B").is_some());
    }
}
