//! Required project layout check.

use std::path::PathBuf;

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::StructureConfig;
use crate::error::{EnvcheckError, Result};

#[derive(Debug)]
pub struct StructureCheck {
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl StructureCheck {
    pub fn new(config: &StructureConfig) -> Self {
        Self {
            directories: config.directories.clone(),
            files: config.files.clone(),
        }
    }
}

impl Check for StructureCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Structure
    }

    fn category(&self) -> &str {
        "Project Structure"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let mut findings = Vec::new();
        let mut missing = Vec::new();

        for dir in &self.directories {
            if ctx.resolve(dir).is_dir() {
                findings.push(Finding::pass(format!("Directory: {}", dir.display())));
            } else {
                findings.push(Finding::fail(format!("Missing directory: {}", dir.display())));
                missing.push(dir.display().to_string());
            }
        }

        for file in &self.files {
            if ctx.resolve(file).is_file() {
                findings.push(Finding::pass(format!("File: {}", file.display())));
            } else {
                findings.push(Finding::fail(format!("Missing file: {}", file.display())));
                missing.push(file.display().to_string());
            }
        }

        let outcome = if missing.is_empty() {
            CheckOutcome::new(
                CheckStatus::Pass,
                "All required files and directories present",
            )
        } else {
            CheckOutcome::new(
                CheckStatus::Fail,
                EnvcheckError::StructureMissing { paths: missing }.to_string(),
            )
        };
        Ok(outcome.with_findings(findings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::Harness;
    use std::fs;

    fn config() -> StructureConfig {
        StructureConfig {
            directories: vec![PathBuf::from("src"), PathBuf::from("docs")],
            files: vec![PathBuf::from("src/README.md")],
        }
    }

    #[test]
    fn complete_layout_passes() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("src/README.md"), "# hi").unwrap();

        let outcome = Harness::new(dir.path())
            .run(&StructureCheck::new(&config()))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Pass));
        assert_eq!(outcome.findings.len(), 3);
    }

    #[test]
    fn missing_paths_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();

        let outcome = Harness::new(dir.path())
            .run(&StructureCheck::new(&config()))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Fail));
        assert_eq!(
            outcome.details(),
            "Missing required paths: docs, src/README.md"
        );
    }

    #[test]
    fn file_where_directory_expected_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docs"), "not a dir").unwrap();
        let config = StructureConfig {
            directories: vec![PathBuf::from("docs")],
            files: vec![],
        };
        let outcome = Harness::new(dir.path())
            .run(&StructureCheck::new(&config))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Fail));
    }

    #[test]
    fn empty_requirements_pass() {
        let dir = tempfile::tempdir().unwrap();
        let config = StructureConfig {
            directories: vec![],
            files: vec![],
        };
        let outcome = Harness::new(dir.path())
            .run(&StructureCheck::new(&config))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Pass));
    }
}
