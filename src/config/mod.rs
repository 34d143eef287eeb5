//! Configuration loading for envcheck.
//!
//! # Modules
//!
//! - [`schema`] - Serde structs for `.envcheck.yml` and their defaults
//! - [`loader`] - Discovery, parsing and validation

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, validate, CONFIG_FILE_NAME};
pub use schema::{
    DependenciesConfig, EditorConfig, EnvFileConfig, InterpreterConfig, NetworkConfig,
    PermissionsConfig, ReportConfig, StructureConfig, ToolConfig, VcsConfig, VerifyConfig,
    VirtualenvConfig,
};
