//! Virtual environment check.
//!
//! Only meaningful when the project declares dependencies, so it records
//! nothing when the manifest is absent.

use std::path::PathBuf;

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::VirtualenvConfig;
use crate::error::Result;

#[derive(Debug)]
pub struct VirtualenvCheck {
    env_vars: Vec<String>,
    manifest: PathBuf,
}

impl VirtualenvCheck {
    pub fn new(config: &VirtualenvConfig, manifest: &std::path::Path) -> Self {
        Self {
            env_vars: config.env_vars.clone(),
            manifest: manifest.to_path_buf(),
        }
    }
}

impl Check for VirtualenvCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Virtualenv
    }

    fn category(&self) -> &str {
        "Virtual Environment"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        if !ctx.resolve(&self.manifest).exists() {
            return Ok(CheckOutcome::silent());
        }

        let active = self
            .env_vars
            .iter()
            .find_map(|var| ctx.env_var(var).map(|value| (var, value)));

        match active {
            Some((var, prefix)) => Ok(CheckOutcome::new(
                CheckStatus::Pass,
                "Virtual environment active",
            )
            .with_findings(vec![Finding::pass(format!("{}={}", var, prefix))])),
            None => Ok(
                CheckOutcome::new(CheckStatus::Warning, "No virtual environment").with_findings(
                    vec![Finding::warning(
                        "No virtual environment detected. Consider using: python -m venv venv && source venv/bin/activate",
                    )],
                ),
            ),
        }
    }
}
