//! Program execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env, platform_descriptor};
