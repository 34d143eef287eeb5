//! Version control tool check.
//!
//! The tool must be installed, and its identity settings (`user.name`,
//! `user.email` for git) should be configured. A missing tool fails; an
//! unconfigured identity is only a warning.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::VcsConfig;
use crate::error::{EnvcheckError, Result};
use crate::probe::ToolProbe;

#[derive(Debug)]
pub struct VcsCheck {
    name: String,
    category: String,
    version: ToolProbe,
    identity: Vec<(String, ToolProbe)>,
}

impl VcsCheck {
    pub fn new(config: &VcsConfig) -> Result<Self> {
        let version = ToolProbe::from_command(&config.command).ok_or_else(|| {
            EnvcheckError::ConfigValidationError {
                message: "vcs.command must not be empty".to_string(),
            }
        })?;
        let program = version.program().to_string();
        let identity = config
            .identity_keys
            .iter()
            .map(|key| {
                let args = vec!["config".to_string(), key.clone()];
                (key.clone(), ToolProbe::config(&program, &args))
            })
            .collect();
        Ok(Self {
            name: config.name.clone(),
            category: format!("{} Installation", config.name),
            version,
            identity,
        })
    }
}

impl Check for VcsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Vcs
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let version = match self.version.execute(ctx.runner) {
            Ok(version) => version,
            Err(e) => {
                return Ok(
                    CheckOutcome::new(CheckStatus::Fail, format!("{} not found", self.name))
                        .with_findings(vec![Finding::fail(e.to_string())]),
                );
            }
        };

        let mut findings = vec![Finding::pass(format!("{} - Installed", version))];
        let mut values = Vec::new();
        let mut unset = Vec::new();
        for (key, probe) in &self.identity {
            match probe.execute(ctx.runner) {
                Ok(value) => values.push(value),
                Err(e) => {
                    tracing::debug!("{} identity '{}' unavailable: {}", self.name, key, e);
                    unset.push(key.as_str());
                }
            }
        }

        if !unset.is_empty() {
            findings.push(Finding::warning(format!(
                "{} not configured. Run: {} config --global {} \"...\"",
                self.name,
                self.version.program(),
                unset[0]
            )));
            return Ok(CheckOutcome::new(
                CheckStatus::Warning,
                format!("{}, not configured ({} unset)", version, unset.join(", ")),
            )
            .with_findings(findings));
        }

        let details = match values.as_slice() {
            [] => version,
            [name, email] => format!("{}, configured as {} <{}>", version, name, email),
            _ => format!("{}, configured as {}", version, values.join(" ")),
        };
        findings.push(Finding::pass("Identity configured"));
        Ok(CheckOutcome::new(CheckStatus::Pass, details).with_findings(findings))
    }
}
