//! The ordered check table and plans built from it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::dependencies::DependenciesCheck;
use super::editor::EditorCheck;
use super::env_files::EnvFilesCheck;
use super::interpreter::InterpreterCheck;
use super::network::NetworkCheck;
use super::optional_tools::OptionalToolsCheck;
use super::package_manager::PackageManagerCheck;
use super::permissions::PermissionsCheck;
use super::structure::StructureCheck;
use super::vcs::VcsCheck;
use super::virtualenv::VirtualenvCheck;
use super::Check;
use crate::config::VerifyConfig;
use crate::error::{EnvcheckError, Result};

/// Identifies a row of the check table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Interpreter,
    PackageManager,
    Vcs,
    Editor,
    Structure,
    Dependencies,
    Virtualenv,
    EnvFiles,
    OptionalTools,
    Network,
    Permissions,
}

impl CheckKind {
    /// The kebab-case name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Interpreter => "interpreter",
            CheckKind::PackageManager => "package-manager",
            CheckKind::Vcs => "vcs",
            CheckKind::Editor => "editor",
            CheckKind::Structure => "structure",
            CheckKind::Dependencies => "dependencies",
            CheckKind::Virtualenv => "virtualenv",
            CheckKind::EnvFiles => "env-files",
            CheckKind::OptionalTools => "optional-tools",
            CheckKind::Network => "network",
            CheckKind::Permissions => "permissions",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CHECK_TABLE
            .iter()
            .map(|def| def.kind)
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = CHECK_TABLE.iter().map(|def| def.kind.name()).collect();
                format!("unknown check '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// One row of the check table.
pub struct CheckDef {
    pub kind: CheckKind,
    pub build: fn(&VerifyConfig) -> Result<Box<dyn Check>>,
}

/// Every check, in execution order.
pub const CHECK_TABLE: &[CheckDef] = &[
    CheckDef {
        kind: CheckKind::Interpreter,
        build: build_interpreter,
    },
    CheckDef {
        kind: CheckKind::PackageManager,
        build: build_package_manager,
    },
    CheckDef {
        kind: CheckKind::Vcs,
        build: build_vcs,
    },
    CheckDef {
        kind: CheckKind::Editor,
        build: build_editor,
    },
    CheckDef {
        kind: CheckKind::Structure,
        build: build_structure,
    },
    CheckDef {
        kind: CheckKind::Dependencies,
        build: build_dependencies,
    },
    CheckDef {
        kind: CheckKind::Virtualenv,
        build: build_virtualenv,
    },
    CheckDef {
        kind: CheckKind::EnvFiles,
        build: build_env_files,
    },
    CheckDef {
        kind: CheckKind::OptionalTools,
        build: build_optional_tools,
    },
    CheckDef {
        kind: CheckKind::Network,
        build: build_network,
    },
    CheckDef {
        kind: CheckKind::Permissions,
        build: build_permissions,
    },
];

fn build_interpreter(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(InterpreterCheck::new(&config.interpreter)?))
}

fn build_package_manager(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(PackageManagerCheck::new(&config.package_manager)?))
}

fn build_vcs(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(VcsCheck::new(&config.vcs)?))
}

fn build_editor(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(EditorCheck::new(&config.editors)))
}

fn build_structure(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(StructureCheck::new(&config.structure)))
}

fn build_dependencies(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(DependenciesCheck::new(&config.dependencies)))
}

fn build_virtualenv(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(VirtualenvCheck::new(
        &config.virtualenv,
        &config.dependencies.manifest,
    )))
}

fn build_env_files(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(EnvFilesCheck::new(&config.env_files)))
}

fn build_optional_tools(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(OptionalToolsCheck::new(&config.optional_tools)))
}

fn build_network(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(NetworkCheck::new(&config.network)))
}

fn build_permissions(config: &VerifyConfig) -> Result<Box<dyn Check>> {
    Ok(Box::new(PermissionsCheck::new(&config.permissions)))
}

/// The checks selected for one run, in table order.
pub struct CheckPlan {
    checks: Vec<Box<dyn Check>>,
}

impl CheckPlan {
    /// Instantiate every table row not disabled by the config or by `skip`.
    pub fn from_config(config: &VerifyConfig, skip: &[CheckKind]) -> Result<Self> {
        let mut checks = Vec::new();
        for def in CHECK_TABLE {
            if config.disabled_checks.contains(&def.kind) || skip.contains(&def.kind) {
                tracing::debug!("Check '{}' disabled", def.kind);
                continue;
            }
            checks.push((def.build)(config)?);
        }
        Self::from_checks(checks)
    }

    /// Build a plan from an explicit list of checks.
    ///
    /// Fails if a category is empty or appears twice.
    pub fn from_checks(checks: Vec<Box<dyn Check>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for check in &checks {
            let category = check.category();
            if category.trim().is_empty() {
                return Err(EnvcheckError::ConfigValidationError {
                    message: format!("check '{}' has an empty category", check.kind()),
                });
            }
            if !seen.insert(category.to_string()) {
                return Err(EnvcheckError::ConfigValidationError {
                    message: format!("duplicate check category '{}'", category),
                });
            }
        }
        Ok(Self { checks })
    }

    /// The checks in execution order.
    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Kinds of the planned checks, in order.
    pub fn kinds(&self) -> Vec<CheckKind> {
        self.checks.iter().map(|c| c.kind()).collect()
    }
}
