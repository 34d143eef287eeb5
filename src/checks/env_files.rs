//! Environment file check.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::EnvFileConfig;
use crate::error::Result;

/// Fails when a required file is missing. Optional files only produce findings.
#[derive(Debug)]
pub struct EnvFilesCheck {
    files: Vec<EnvFileConfig>,
}

impl EnvFilesCheck {
    pub fn new(files: &[EnvFileConfig]) -> Self {
        Self {
            files: files.to_vec(),
        }
    }
}

impl Check for EnvFilesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::EnvFiles
    }

    fn category(&self) -> &str {
        "Environment Files"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let mut findings = Vec::new();
        let mut missing = Vec::new();

        for file in &self.files {
            let label = if file.description.is_empty() {
                file.path.display().to_string()
            } else {
                format!("{}: {}", file.description, file.path.display())
            };

            if ctx.resolve(&file.path).exists() {
                findings.push(Finding::pass(label));
            } else if file.required {
                findings.push(Finding::fail(format!(
                    "Missing required file: {}",
                    file.path.display()
                )));
                missing.push(file.path.display().to_string());
            } else {
                findings.push(Finding::info(format!(
                    "Optional file not found: {}",
                    file.path.display()
                )));
            }
        }

        let outcome = if missing.is_empty() {
            CheckOutcome::new(CheckStatus::Pass, "Environment setup acceptable")
        } else {
            CheckOutcome::new(
                CheckStatus::Fail,
                format!("Missing required files: {}", missing.join(", ")),
            )
        };
        Ok(outcome.with_findings(findings))
    }
}
