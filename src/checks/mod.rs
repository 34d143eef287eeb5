//! Environment checks.
//!
//! Each check probes one aspect of the environment through a
//! [`CheckContext`] and reports at most one [`Verdict`], plus any number of
//! item-level [`Finding`]s shown in verbose mode. Checks never depend on
//! one another; the runner records their verdicts in table order.
//!
//! The ordered table of checks lives in [`registry`].

pub mod dependencies;
pub mod editor;
pub mod env_files;
pub mod interpreter;
pub mod network;
pub mod optional_tools;
pub mod package_manager;
pub mod permissions;
pub mod registry;
pub mod status;
pub mod structure;
pub mod vcs;
pub mod virtualenv;

pub use registry::{CheckDef, CheckKind, CheckPlan, CHECK_TABLE};
pub use status::{CheckResult, CheckStatus};

use std::path::Path;

use crate::error::Result;
use crate::probe::{NetworkProbe, ProcessRunner};

/// Everything a check may look at.
pub struct CheckContext<'a> {
    /// Directory being verified; relative paths resolve against it.
    pub project_root: &'a Path,

    /// Runs external programs.
    pub runner: &'a dyn ProcessRunner,

    /// Probes HTTP endpoints.
    pub network: &'a dyn NetworkProbe,

    /// Environment variable lookup.
    pub env: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> CheckContext<'a> {
    /// Look up an environment variable, treating empty values as unset.
    pub fn env_var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.is_empty())
    }

    /// Resolve a path against the project root.
    pub fn resolve(&self, path: &Path) -> std::path::PathBuf {
        self.project_root.join(path)
    }
}

/// A single environment check.
pub trait Check {
    /// Which row of the check table this is.
    fn kind(&self) -> CheckKind;

    /// The category its result is recorded under.
    fn category(&self) -> &str;

    /// Probe the environment.
    ///
    /// Expected degradations (tool absent, file missing) are reported
    /// through the returned outcome. An `Err` means the check itself broke;
    /// the runner records it as a failure and moves on.
    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome>;
}

/// The status and explanation a check records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: CheckStatus,
    pub details: String,
}

/// An item-level observation made while probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub status: CheckStatus,
    pub message: String,
}

impl Finding {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Info, message)
    }
}

/// What a check hands back to the runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// `None` when the check has nothing to record.
    pub verdict: Option<Verdict>,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    /// An outcome recording `status` with `details`.
    pub fn new(status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            verdict: Some(Verdict {
                status,
                details: details.into(),
            }),
            findings: Vec::new(),
        }
    }

    /// An outcome that records nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Attach findings.
    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }

    /// The recorded status, if any.
    pub fn status(&self) -> Option<CheckStatus> {
        self.verdict.as_ref().map(|v| v.status)
    }

    /// The recorded details, or an empty string.
    pub fn details(&self) -> &str {
        self.verdict.as_ref().map(|v| v.details.as_str()).unwrap_or("")
    }
}
