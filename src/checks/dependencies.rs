//! Declared dependency check.
//!
//! Reads a requirements-style manifest and asks the resolve command about
//! each package name. Missing packages are a warning: the course can start,
//! but `pip install -r` should be run first.

use std::collections::HashSet;
use std::path::PathBuf;

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::DependenciesConfig;
use crate::error::{EnvcheckError, Result};

/// Placeholder replaced by the package name in the resolve command.
pub const NAME_PLACEHOLDER: &str = "{name}";

const SPECIFIER_STARTS: &[char] = &['=', '>', '<', '~', '!', '[', ';', '@'];

/// Extract package names from a requirements manifest.
///
/// Skips blank lines, comments and option lines (`-r`, `--index-url`);
/// strips inline comments; cuts each name at the first version specifier,
/// extras marker, environment marker or whitespace. Names are returned once,
/// in first-seen order.
pub fn parse_manifest(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in text.lines() {
        let line = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        }
        .trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }

        let end = line
            .find(|c: char| SPECIFIER_STARTS.contains(&c) || c.is_whitespace())
            .unwrap_or(line.len());
        let name = line[..end].trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            names.push(name.to_string());
        }
    }

    names
}

#[derive(Debug)]
pub struct DependenciesCheck {
    manifest: PathBuf,
    resolve_command: Vec<String>,
}

impl DependenciesCheck {
    pub fn new(config: &DependenciesConfig) -> Self {
        Self {
            manifest: config.manifest.clone(),
            resolve_command: config.resolve_command.clone(),
        }
    }

    fn manifest_name(&self) -> String {
        self.manifest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.manifest.display().to_string())
    }

    fn resolves(&self, ctx: &CheckContext<'_>, name: &str) -> Result<bool> {
        let mut parts = self
            .resolve_command
            .iter()
            .map(|part| part.replace(NAME_PLACEHOLDER, name));
        let program = parts
            .next()
            .ok_or_else(|| EnvcheckError::ConfigValidationError {
                message: "dependencies.resolve_command must not be empty".to_string(),
            })?;
        let args: Vec<String> = parts.collect();
        Ok(ctx.runner.run(&program, &args).is_success())
    }
}

impl Check for DependenciesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Dependencies
    }

    fn category(&self) -> &str {
        "Dependencies"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let path = ctx.resolve(&self.manifest);
        if !path.exists() {
            return Ok(CheckOutcome::new(
                CheckStatus::Info,
                format!("No {}", self.manifest_name()),
            )
            .with_findings(vec![Finding::info(format!(
                "No {} found (may be optional)",
                self.manifest_name()
            ))]));
        }

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                return Ok(
                    CheckOutcome::new(CheckStatus::Warning, "Could not verify packages")
                        .with_findings(vec![Finding::warning(format!(
                            "Could not read {}: {}",
                            path.display(),
                            e
                        ))]),
                );
            }
        };

        let mut findings = vec![Finding::pass(format!("{} found", self.manifest_name()))];
        let mut missing = Vec::new();
        for name in parse_manifest(&text) {
            if self.resolves(ctx, &name)? {
                findings.push(Finding::pass(format!("{}: installed", name)));
            } else {
                findings.push(Finding::warning(format!("{}: missing", name)));
                missing.push(name);
            }
        }

        if missing.is_empty() {
            return Ok(
                CheckOutcome::new(CheckStatus::Pass, "All dependencies available")
                    .with_findings(findings),
            );
        }

        findings.push(Finding::warning(format!(
            "Run: pip install -r {}",
            self.manifest.display()
        )));
        Ok(CheckOutcome::new(
            CheckStatus::Warning,
            EnvcheckError::DependencyUnresolved { names: missing }.to_string(),
        )
        .with_findings(findings))
    }
}
