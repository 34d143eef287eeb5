//! Check status and recorded results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Requirement met.
    Pass,

    /// Requirement not met; the environment is not ready.
    Fail,

    /// Something is off but work can continue.
    Warning,

    /// Informational only, never counted.
    Info,
}

impl CheckStatus {
    /// The upper-case label used in reports and tables.
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Info => "INFO",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded row of the verification: category, status and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: String,
    pub status: CheckStatus,
    pub details: String,
}

impl CheckResult {
    pub fn new(category: impl Into<String>, status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            status,
            details: details.into(),
        }
    }
}
