//! Verification reports.
//!
//! A [`VerificationReport`] is built once per run from the recorded
//! results and written as pretty-printed JSON, replacing any previous
//! report at the same path.

pub mod render;

pub use render::{next_steps, render_banner, render_summary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::checks::CheckResult;
use crate::error::{EnvcheckError, Result};
use crate::runner::{ResultAggregator, Summary};

/// Everything one run found, as persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub timestamp: DateTime<Utc>,
    pub platform: String,
    pub interpreter_version: String,
    pub summary: Summary,
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    /// Build a report from a finished run.
    pub fn new(
        aggregator: &ResultAggregator,
        platform: impl Into<String>,
        interpreter_version: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            platform: platform.into(),
            interpreter_version: interpreter_version.into(),
            summary: aggregator.summary(),
            results: aggregator.results().to_vec(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EnvcheckError::Other(anyhow::anyhow!("Failed to serialize report: {}", e)))
    }

    /// Write the report, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json + "\n").map_err(|e| EnvcheckError::ReportWriteError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("Report written to {}", path.display());
        Ok(())
    }

    /// Read a previously saved report.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            EnvcheckError::Other(anyhow::anyhow!(
                "Invalid report at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Exit code implied by the recorded results.
    pub fn exit_code(&self) -> i32 {
        if self.summary.failed > 0 {
            1
        } else {
            0
        }
    }
}
