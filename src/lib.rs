//! envcheck - Development environment verification.
//!
//! envcheck probes a workstation and a project checkout for everything a
//! course needs (interpreter, package manager, version control, editor,
//! project layout, dependencies, environment files, network access and
//! write permissions), prints a summary and writes a JSON report.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their ordered table
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.envcheck.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Process and HTTP probing behind swappable traits
//! - [`report`] - JSON report and human-readable summary
//! - [`runner`] - Check execution and result aggregation
//! - [`shell`] - Low-level command execution with timeouts
//! - [`ui`] - Spinners, status lines and the results table
//!
//! # Example
//!
//! ```
//! use envcheck::checks::{CheckPlan, CheckStatus};
//! use envcheck::config::VerifyConfig;
//! use envcheck::runner::ResultAggregator;
//!
//! let plan = CheckPlan::from_config(&VerifyConfig::default(), &[]).unwrap();
//! assert_eq!(plan.checks()[0].category(), "Python Version");
//!
//! let mut results = ResultAggregator::new();
//! results.record_result("Python Version", CheckStatus::Pass, "Version 3.12.1 meets requirements (>=3.8)");
//! assert_eq!(results.exit_code(), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnvcheckError, Result};
