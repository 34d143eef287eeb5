//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks convert their own failures into a [`CheckStatus`] and never
//!   propagate them; the probe-level variants below describe those failures
//!   and supply the `details` text of the recorded result
//! - An `Err` escaping a check is an unexpected fault: the runner records it
//!   as a FAIL and moves on
//! - Errors raised outside every check (config, plan validation, output
//!   serialization) abort the run with exit code 1
//!
//! [`CheckStatus`]: crate::checks::CheckStatus

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// An external tool could not be found or did not run successfully.
    #[error("{tool} not found: {message}")]
    ToolMissing { tool: String, message: String },

    /// An external tool is installed but not configured for use.
    #[error("{tool} is not configured: {message}")]
    ToolMisconfigured { tool: String, message: String },

    /// Required directories or files are missing from the project.
    #[error("Missing required paths: {}", .paths.join(", "))]
    StructureMissing { paths: Vec<String> },

    /// Declared dependencies could not be resolved.
    #[error("Missing: {}", .names.join(", "))]
    DependencyUnresolved { names: Vec<String> },

    /// A network endpoint could not be reached or returned a non-success status.
    #[error("Network access to {endpoint} failed: {message}")]
    NetworkUnreachable { endpoint: String, message: String },

    /// The working directory does not allow the file round-trip.
    #[error("Permission error at {}: {source}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A check failed in a way it did not anticipate.
    #[error("Check '{check}' failed unexpectedly: {message}")]
    UnexpectedFault { check: String, message: String },

    /// The directory to verify does not exist.
    #[error("Project directory {} does not exist", .path.display())]
    ProjectNotFound { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The verification report could not be written.
    #[error("Could not save report to {}: {message}", .path.display())]
    ReportWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
