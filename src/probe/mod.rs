//! Collaborators that checks use to look at the outside world.
//!
//! Every external signal a check depends on goes through one of these
//! seams so tests can substitute fakes:
//!
//! - [`ProcessRunner`] - runs a program and reports success, failure or
//!   unavailability
//! - [`NetworkProbe`] - reports whether an HTTP endpoint answers with 2xx
//! - [`ToolProbe`] - the two ways a tool is interrogated (version and config)
//!
//! # Example
//!
//! ```no_run
//! use envcheck::probe::{SystemRunner, ToolProbe};
//! use std::time::Duration;
//!
//! let runner = SystemRunner::new(std::env::current_dir().unwrap(), Duration::from_secs(10));
//! let probe = ToolProbe::version("git", &["--version".to_string()]);
//! match probe.execute(&runner) {
//!     Ok(version) => println!("found {}", version),
//!     Err(e) => println!("{}", e),
//! }
//! ```

pub mod http;
pub mod version;

pub use http::{EndpointStatus, HttpProbe, NetworkProbe};
pub use version::{extract_version, Version};

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EnvcheckError, Result};
use crate::shell::{self, CommandOptions};

/// Outcome of running an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutput {
    /// The program exited with status 0.
    Success { stdout: String, stderr: String },

    /// The program ran but exited non-zero (or was killed).
    Failed { code: Option<i32>, stderr: String },

    /// The program could not be started or did not finish in time.
    Unavailable { message: String },
}

impl ProbeOutput {
    /// Whether the program exited successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutput::Success { .. })
    }
}

/// Runs external programs on behalf of checks.
pub trait ProcessRunner {
    /// Run `program` with `args` and report what happened.
    fn run(&self, program: &str, args: &[String]) -> ProbeOutput;
}

/// [`ProcessRunner`] backed by real process execution.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
    timeout: Duration,
}

impl SystemRunner {
    /// Create a runner that executes programs in `cwd`, killing any that
    /// run longer than `timeout`.
    pub fn new(cwd: PathBuf, timeout: Duration) -> Self {
        Self { cwd, timeout }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> ProbeOutput {
        let options = CommandOptions {
            cwd: Some(self.cwd.clone()),
            timeout: Some(self.timeout),
            ..Default::default()
        };

        tracing::debug!("Probing {} {}", program, args.join(" "));

        match shell::execute(program, args, &options) {
            Ok(result) if result.timed_out => ProbeOutput::Unavailable {
                message: format!("timed out after {}s", self.timeout.as_secs()),
            },
            Ok(result) if result.success => ProbeOutput::Success {
                stdout: result.stdout,
                stderr: result.stderr,
            },
            Ok(result) => ProbeOutput::Failed {
                code: result.exit_code,
                stderr: result.stderr,
            },
            Err(e) => ProbeOutput::Unavailable {
                message: match e {
                    EnvcheckError::ToolMissing { message, .. } => message,
                    other => other.to_string(),
                },
            },
        }
    }
}

/// The ways a tool can be interrogated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolProbe {
    /// The tool is present iff the command exits 0; yields its first output line.
    Version { program: String, args: Vec<String> },

    /// Reads a configuration value; set iff the command exits 0 with non-empty output.
    Config { program: String, args: Vec<String> },
}

impl ToolProbe {
    /// Build a version probe.
    pub fn version(program: &str, args: &[String]) -> Self {
        ToolProbe::Version {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }

    /// Build a config probe.
    pub fn config(program: &str, args: &[String]) -> Self {
        ToolProbe::Config {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }

    /// Build a version probe from `[program, args...]`.
    ///
    /// Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::version(program, args))
    }

    /// The program this probe runs.
    pub fn program(&self) -> &str {
        match self {
            ToolProbe::Version { program, .. } | ToolProbe::Config { program, .. } => program,
        }
    }

    /// Run the probe.
    ///
    /// Version probes fail with `ToolMissing`; config probes fail with
    /// `ToolMisconfigured` when the tool runs but the value is unset.
    pub fn execute(&self, runner: &dyn ProcessRunner) -> Result<String> {
        match self {
            ToolProbe::Version { program, args } => match runner.run(program, args) {
                ProbeOutput::Success { stdout, stderr } => {
                    // Some tools (java -version, old pythons) print to stderr.
                    Ok(first_line(&stdout)
                        .or_else(|| first_line(&stderr))
                        .unwrap_or_default())
                }
                ProbeOutput::Failed { code, stderr } => Err(EnvcheckError::ToolMissing {
                    tool: program.clone(),
                    message: failure_message(code, &stderr),
                }),
                ProbeOutput::Unavailable { message } => Err(EnvcheckError::ToolMissing {
                    tool: program.clone(),
                    message,
                }),
            },
            ToolProbe::Config { program, args } => match runner.run(program, args) {
                ProbeOutput::Success { stdout, .. } if !stdout.trim().is_empty() => {
                    Ok(stdout.trim().to_string())
                }
                ProbeOutput::Success { .. } | ProbeOutput::Failed { .. } => {
                    Err(EnvcheckError::ToolMisconfigured {
                        tool: program.clone(),
                        message: format!("'{}' is not set", args.join(" ")),
                    })
                }
                ProbeOutput::Unavailable { message } => Err(EnvcheckError::ToolMissing {
                    tool: program.clone(),
                    message,
                }),
            },
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

fn failure_message(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    };
    match first_line(stderr) {
        Some(line) => format!("{} ({})", status, line),
        None => status,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted collaborators shared by check tests.

    use super::*;
    use std::collections::HashMap;

    /// A [`ProcessRunner`] answering from a table keyed by the full command line.
    ///
    /// Unknown commands are reported as unavailable, like a missing executable.
    #[derive(Debug, Default)]
    pub struct FakeRunner {
        responses: HashMap<String, ProbeOutput>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn succeed(mut self, command: &str, stdout: &str) -> Self {
            self.responses.insert(
                command.to_string(),
                ProbeOutput::Success {
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                },
            );
            self
        }

        pub fn fail(mut self, command: &str, code: i32) -> Self {
            self.responses.insert(
                command.to_string(),
                ProbeOutput::Failed {
                    code: Some(code),
                    stderr: String::new(),
                },
            );
            self
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> ProbeOutput {
            let key = std::iter::once(program.to_string())
                .chain(args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ");
            self.responses
                .get(&key)
                .cloned()
                .unwrap_or_else(|| ProbeOutput::Unavailable {
                    message: "No such file or directory (os error 2)".to_string(),
                })
        }
    }

    /// A [`NetworkProbe`] answering from a table keyed by endpoint.
    ///
    /// Unknown endpoints time out.
    #[derive(Debug, Default)]
    pub struct FakeNetwork {
        responses: HashMap<String, EndpointStatus>,
    }

    impl FakeNetwork {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, endpoint: &str, status: u16) -> Self {
            self.responses
                .insert(endpoint.to_string(), EndpointStatus::from_status(status));
            self
        }
    }

    impl NetworkProbe for FakeNetwork {
        fn check(&self, endpoint: &str) -> EndpointStatus {
            self.responses
                .get(endpoint)
                .cloned()
                .unwrap_or_else(|| EndpointStatus::Unreachable {
                    message: "operation timed out".to_string(),
                })
        }
    }

    pub fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}
