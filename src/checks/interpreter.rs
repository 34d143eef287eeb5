//! Interpreter version check.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::InterpreterConfig;
use crate::error::{EnvcheckError, Result};
use crate::probe::{extract_version, ProcessRunner, ToolProbe, Version};

/// Fails unless the interpreter runs and reports at least the minimum version.
#[derive(Debug)]
pub struct InterpreterCheck {
    name: String,
    category: String,
    probe: ToolProbe,
    minimum: Version,
}

impl InterpreterCheck {
    pub fn new(config: &InterpreterConfig) -> Result<Self> {
        let probe = ToolProbe::from_command(&config.command).ok_or_else(|| {
            EnvcheckError::ConfigValidationError {
                message: "interpreter.command must not be empty".to_string(),
            }
        })?;
        let minimum = Version::parse(&config.minimum_version).ok_or_else(|| {
            EnvcheckError::ConfigValidationError {
                message: format!(
                    "interpreter.minimum_version '{}' is not a version",
                    config.minimum_version
                ),
            }
        })?;
        Ok(Self {
            name: config.name.clone(),
            category: format!("{} Version", config.name),
            probe,
            minimum,
        })
    }
}

impl Check for InterpreterCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Interpreter
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let output = match self.probe.execute(ctx.runner) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("{} probe failed: {}", self.name, e);
                return Ok(CheckOutcome::new(
                    CheckStatus::Fail,
                    format!("{} not found", self.name),
                )
                .with_findings(vec![Finding::fail(e.to_string())]));
            }
        };

        let Some(version) = extract_version(&output) else {
            return Ok(CheckOutcome::new(
                CheckStatus::Fail,
                format!("Could not determine {} version from '{}'", self.name, output),
            ));
        };

        if version >= self.minimum {
            Ok(CheckOutcome::new(
                CheckStatus::Pass,
                format!(
                    "Version {} meets requirements (>={})",
                    version,
                    short(&self.minimum)
                ),
            )
            .with_findings(vec![Finding::pass(format!(
                "{} {} - Compatible",
                self.name, version
            ))]))
        } else {
            Ok(CheckOutcome::new(
                CheckStatus::Fail,
                format!(
                    "Version {} is too old. Requires >={}",
                    version,
                    short(&self.minimum)
                ),
            )
            .with_findings(vec![Finding::fail(format!(
                "{} {} - Too old! Please upgrade to {} {} or higher",
                self.name,
                version,
                self.name,
                short(&self.minimum)
            ))]))
        }
    }
}

/// Render a minimum version without a trailing `.0` patch (`3.8`, not `3.8.0`).
fn short(version: &Version) -> String {
    if version.patch == 0 {
        format!("{}.{}", version.major, version.minor)
    } else {
        version.to_string()
    }
}

/// Ask the interpreter for its version, for the report header.
///
/// Returns `"unknown"` when the interpreter cannot be run.
pub fn interpreter_version(config: &InterpreterConfig, runner: &dyn ProcessRunner) -> String {
    let Some(probe) = ToolProbe::from_command(&config.command) else {
        return "unknown".to_string();
    };
    match probe.execute(runner) {
        Ok(output) => extract_version(&output)
            .map(|v| v.to_string())
            .unwrap_or(output),
        Err(_) => "unknown".to_string(),
    }
}
