//! Verify command implementation.
//!
//! Loads the configuration, runs every enabled check, then prints the
//! summary (or JSON) and writes the report file.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checks::interpreter::interpreter_version;
use crate::checks::{CheckContext, CheckKind, CheckPlan};
use crate::cli::args::Cli;
use crate::config::{load_config, VerifyConfig};
use crate::error::{EnvcheckError, Result};
use crate::probe::{HttpProbe, NetworkProbe, ProcessRunner, SystemRunner};
use crate::report::{render_banner, render_summary, VerificationReport};
use crate::runner::VerificationRunner;
use crate::shell::platform_descriptor;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Options the verify command takes from the command line.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    pub config: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub no_report: bool,
    pub json: bool,
    pub skip: Vec<CheckKind>,
}

impl From<&Cli> for VerifyOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            report: cli.report.clone(),
            no_report: cli.no_report,
            json: cli.json,
            skip: cli.skip.clone(),
        }
    }
}

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    options: VerifyOptions,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, options: VerifyOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
        }
    }

    /// Run the checks against the given collaborators.
    pub fn run_with(
        &self,
        config: &VerifyConfig,
        runner: &dyn ProcessRunner,
        network: &dyn NetworkProbe,
        env: &dyn Fn(&str) -> Option<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let plan = CheckPlan::from_config(config, &self.options.skip)?;
        tracing::debug!("Planned checks: {:?}", plan.kinds());

        let platform = platform_descriptor();
        let interpreter = interpreter_version(&config.interpreter, runner);
        render_banner(
            ui,
            &platform,
            &format!("{} {}", config.interpreter.name, interpreter),
            Utc::now(),
        );

        let ctx = CheckContext {
            project_root: &self.project_root,
            runner,
            network,
            env,
        };
        let aggregator = VerificationRunner::new(&plan).run_all_checks(&ctx, ui);
        let report = VerificationReport::new(&aggregator, platform, interpreter);

        let saved_to = self.save_report(&report, config, ui);

        if self.options.json {
            println!("{}", report.to_json()?);
        } else {
            render_summary(ui, &report, saved_to.as_deref());
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }

    /// Where the report goes, or `None` when reporting is off.
    fn report_path(&self, config: &VerifyConfig) -> Option<PathBuf> {
        if self.options.no_report {
            return None;
        }
        if let Some(path) = &self.options.report {
            return Some(self.project_root.join(path));
        }
        config
            .report
            .enabled
            .then(|| self.project_root.join(&config.report.path))
    }

    /// Write the report. A failed write is a warning, never a check failure.
    fn save_report(
        &self,
        report: &VerificationReport,
        config: &VerifyConfig,
        ui: &mut dyn UserInterface,
    ) -> Option<PathBuf> {
        let path = self.report_path(config)?;
        match report.save(&path) {
            Ok(()) => Some(path),
            Err(e) => {
                tracing::warn!("{}", e);
                ui.warning(&e.to_string());
                None
            }
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(EnvcheckError::ProjectNotFound {
                path: self.project_root.clone(),
            });
        }

        let config = load_config(&self.project_root, self.options.config.as_deref())?;

        let runner = SystemRunner::new(
            self.project_root.clone(),
            Duration::from_secs(config.probe_timeout_secs),
        );
        let network = HttpProbe::new(Duration::from_secs(config.network.timeout_secs))?;
        let env = |key: &str| std::env::var(key).ok();

        self.run_with(&config, &runner, &network, &env, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::config::{EnvFileConfig, StructureConfig};
    use crate::probe::testing::{FakeNetwork, FakeRunner};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const REPORT: &str = "setup-verification-report.json";

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("README.md"), "# course\n").unwrap();
        fs::write(dir.path().join(".gitignore"), "*.pyc\n").unwrap();
        dir
    }

    fn config() -> VerifyConfig {
        let mut config = VerifyConfig::default();
        config.structure = StructureConfig {
            directories: vec![PathBuf::from("src")],
            files: vec![PathBuf::from("README.md")],
        };
        config.env_files = vec![EnvFileConfig {
            path: PathBuf::from(".gitignore"),
            required: true,
            description: "Git ignore file".to_string(),
        }];
        config.network.endpoints = vec!["https://pypi.org/".to_string()];
        config
    }

    fn healthy_runner() -> FakeRunner {
        FakeRunner::new()
            .succeed("python3 --version", "Python 3.12.1")
            .succeed("python3 -m pip --version", "pip 24.0 from /usr/lib/python3/dist-packages/pip")
            .succeed("git --version", "git version 2.43.0")
            .succeed("git config user.name", "Ada Lovelace")
            .succeed("git config user.email", "ada@example.com")
            .succeed("code --version", "1.90.0")
            .succeed("node --version", "v20.11.0")
    }

    fn run(
        dir: &TempDir,
        config: &VerifyConfig,
        options: VerifyOptions,
        ui: &mut MockUI,
    ) -> CommandResult {
        let network = FakeNetwork::new().respond("https://pypi.org/", 200);
        let env = |_: &str| -> Option<String> { None };
        VerifyCommand::new(dir.path(), options)
            .run_with(config, &healthy_runner(), &network, &env, ui)
            .unwrap()
    }

    #[test]
    fn healthy_project_passes_and_writes_report() {
        let dir = project();
        let mut ui = MockUI::new();
        let result = run(&dir, &config(), VerifyOptions::default(), &mut ui);

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_success("Congratulations"));

        let report = VerificationReport::load(&dir.path().join(REPORT)).unwrap();
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.interpreter_version, "3.12.1");
        assert_eq!(report.results.len(), 10);
        assert_eq!(report.results[0].category, "Python Version");
    }

    #[test]
    fn missing_required_file_exits_one() {
        let dir = project();
        fs::remove_file(dir.path().join(".gitignore")).unwrap();
        let mut ui = MockUI::new();
        let result = run(&dir, &config(), VerifyOptions::default(), &mut ui);

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_message("Please fix the failed checks"));

        let report = VerificationReport::load(&dir.path().join(REPORT)).unwrap();
        let env_files = report
            .results
            .iter()
            .find(|r| r.category == "Environment Files")
            .unwrap();
        assert_eq!(env_files.status, CheckStatus::Fail);
        assert!(env_files.details.contains(".gitignore"));
    }

    #[test]
    fn no_report_writes_nothing() {
        let dir = project();
        let options = VerifyOptions {
            no_report: true,
            ..Default::default()
        };
        run(&dir, &config(), options, &mut MockUI::new());
        assert!(!dir.path().join(REPORT).exists());
    }

    #[test]
    fn disabled_report_in_config_writes_nothing() {
        let dir = project();
        let mut config = config();
        config.report.enabled = false;
        run(&dir, &config, VerifyOptions::default(), &mut MockUI::new());
        assert!(!dir.path().join(REPORT).exists());
    }

    #[test]
    fn report_flag_overrides_location() {
        let dir = project();
        let options = VerifyOptions {
            report: Some(PathBuf::from("out.json")),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        run(&dir, &config(), options, &mut ui);
        assert!(dir.path().join("out.json").exists());
        assert!(!dir.path().join(REPORT).exists());
        assert!(ui.infos().iter().any(|m| m.contains("out.json")));
    }

    #[test]
    fn unwritable_report_warns_without_changing_exit_code() {
        let dir = project();
        let options = VerifyOptions {
            report: Some(PathBuf::from("missing-dir/report.json")),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = run(&dir, &config(), options, &mut ui);

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_warning("Could not save report"));
    }

    #[test]
    fn skipped_checks_are_not_recorded() {
        let dir = project();
        let options = VerifyOptions {
            skip: vec![CheckKind::Network, CheckKind::OptionalTools],
            ..Default::default()
        };
        run(&dir, &config(), options, &mut MockUI::new());

        let report = VerificationReport::load(&dir.path().join(REPORT)).unwrap();
        assert!(report.results.iter().all(|r| r.category != "Network Access"));
        assert!(report.results.iter().all(|r| r.category != "Optional Tools"));
    }

    #[test]
    fn unreachable_network_is_only_a_warning() {
        let dir = project();
        let mut config = config();
        config.network.endpoints.push("https://github.com".to_string());
        let mut ui = MockUI::new();
        let result = run(&dir, &config, VerifyOptions::default(), &mut ui);

        assert_eq!(result.exit_code, 0);
        let report = VerificationReport::load(&dir.path().join(REPORT)).unwrap();
        assert_eq!(report.summary.warnings, 1);
    }

    #[test]
    fn missing_project_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-project");
        let mut ui = MockUI::new();

        let result = VerifyCommand::new(&gone, VerifyOptions::default()).execute(&mut ui);

        assert!(matches!(result, Err(EnvcheckError::ProjectNotFound { .. })));
        assert!(ui.spinners().is_empty());
        assert!(!gone.join(REPORT).exists());
    }
}
