//! Package manager presence check.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::ToolConfig;
use crate::error::{EnvcheckError, Result};
use crate::probe::ToolProbe;

#[derive(Debug)]
pub struct PackageManagerCheck {
    name: String,
    category: String,
    probe: ToolProbe,
}

impl PackageManagerCheck {
    pub fn new(config: &ToolConfig) -> Result<Self> {
        let probe = ToolProbe::from_command(&config.command).ok_or_else(|| {
            EnvcheckError::ConfigValidationError {
                message: "package_manager.command must not be empty".to_string(),
            }
        })?;
        Ok(Self {
            name: config.name.clone(),
            category: format!("{} Installation", config.name),
            probe,
        })
    }
}

impl Check for PackageManagerCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::PackageManager
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        match self.probe.execute(ctx.runner) {
            Ok(version) => Ok(CheckOutcome::new(CheckStatus::Pass, version.clone())
                .with_findings(vec![Finding::pass(format!("{} - Available", version))])),
            Err(e) => Ok(CheckOutcome::new(
                CheckStatus::Fail,
                format!("{} not available", self.name),
            )
            .with_findings(vec![Finding::fail(format!(
                "{} not found or not working: {}",
                self.name, e
            ))])),
        }
    }
}
