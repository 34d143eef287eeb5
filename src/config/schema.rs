//! Configuration schema definitions for envcheck.
//!
//! This module contains the struct definitions that map to the
//! `.envcheck.yml` file format. Every key is optional: the defaults
//! describe the course template layout and a Python toolchain.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::checks::CheckKind;

/// Root configuration structure for `.envcheck.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Language runtime whose version is checked.
    pub interpreter: InterpreterConfig,

    /// Package manager that must be installed.
    pub package_manager: ToolConfig,

    /// Version control tool and its identity settings.
    pub vcs: VcsConfig,

    /// Editors probed in order; the first one found wins.
    pub editors: Vec<EditorConfig>,

    /// Directories and files the project must contain.
    pub structure: StructureConfig,

    /// Dependency manifest and how each entry is resolved.
    pub dependencies: DependenciesConfig,

    /// Virtual environment detection.
    pub virtualenv: VirtualenvConfig,

    /// Environment files, required or optional.
    pub env_files: Vec<EnvFileConfig>,

    /// Auxiliary tools reported for information only.
    pub optional_tools: Vec<ToolConfig>,

    /// Endpoints that must be reachable.
    pub network: NetworkConfig,

    /// Write-permission probe settings.
    pub permissions: PermissionsConfig,

    /// Where the JSON report is written.
    pub report: ReportConfig,

    /// Checks that should not run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_checks: Vec<CheckKind>,

    /// Upper bound for any single tool invocation, in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            interpreter: InterpreterConfig::default(),
            package_manager: ToolConfig::new("pip", &["python3", "-m", "pip", "--version"]),
            vcs: VcsConfig::default(),
            editors: default_editors(),
            structure: StructureConfig::default(),
            dependencies: DependenciesConfig::default(),
            virtualenv: VirtualenvConfig::default(),
            env_files: default_env_files(),
            optional_tools: default_optional_tools(),
            network: NetworkConfig::default(),
            permissions: PermissionsConfig::default(),
            report: ReportConfig::default(),
            disabled_checks: Vec::new(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

/// Interpreter version requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Display name (e.g., "Python").
    pub name: String,

    /// Command that prints the interpreter version.
    pub command: Vec<String>,

    /// Minimum supported version, e.g. "3.8".
    pub minimum_version: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            name: "Python".to_string(),
            command: strings(&["python3", "--version"]),
            minimum_version: "3.8".to_string(),
        }
    }
}

/// A named tool probed by running a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Display name.
    pub name: String,

    /// Program followed by its arguments.
    pub command: Vec<String>,
}

impl ToolConfig {
    /// Create a tool config from a name and command parts.
    pub fn new(name: &str, command: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            command: strings(command),
        }
    }
}

/// Version control tool settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VcsConfig {
    /// Display name.
    pub name: String,

    /// Command that prints the tool version.
    pub command: Vec<String>,

    /// Config keys that must be set (queried with `<program> config <key>`).
    pub identity_keys: Vec<String>,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            name: "Git".to_string(),
            command: strings(&["git", "--version"]),
            identity_keys: strings(&["user.name", "user.email"]),
        }
    }
}

/// An editor candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Display name.
    pub name: String,

    /// Program followed by its arguments.
    pub command: Vec<String>,

    /// Whether the course recommends this editor.
    #[serde(default)]
    pub recommended: bool,
}

/// Required project layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructureConfig {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            directories: paths(&[
                "course-template",
                "course-template/01-fundamentals",
                "course-template/02-intermediate",
                "course-template/03-advanced",
                "course-template/04-expert",
                "course-template/common",
                "course-template/templates",
                "course-template/assessments",
                "course-template/tools",
            ]),
            files: paths(&[
                "course-template/README.md",
                "course-template/common/code-examples/javascript-starter.js",
                "course-template/common/code-examples/python-starter.py",
                "course-template/templates/lesson-template/README.md",
                "course-template/templates/exercise-template/README.md",
                "course-template/templates/project-template/README.md",
            ]),
        }
    }
}

/// Dependency manifest settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependenciesConfig {
    /// Manifest listing one package per line.
    pub manifest: PathBuf,

    /// Command that exits 0 when a package is resolvable.
    /// `{name}` is replaced with the package name.
    pub resolve_command: Vec<String>,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("course-template/requirements.txt"),
            resolve_command: strings(&["python3", "-m", "pip", "show", "--quiet", "{name}"]),
        }
    }
}

/// Virtual environment detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VirtualenvConfig {
    /// Environment variables that indicate an active environment.
    pub env_vars: Vec<String>,
}

impl Default for VirtualenvConfig {
    fn default() -> Self {
        Self {
            env_vars: strings(&["VIRTUAL_ENV", "CONDA_PREFIX"]),
        }
    }
}

/// An environment file expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvFileConfig {
    pub path: PathBuf,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: String,
}

/// Network reachability settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub endpoints: Vec<String>,

    /// Per-endpoint timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoints: strings(&[
                "https://pypi.org/",
                "https://github.com",
                "https://api.github.com",
            ]),
            timeout_secs: 5,
        }
    }
}

/// Write-permission probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionsConfig {
    /// File name prefix of the temporary probe file.
    pub probe_prefix: String,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            probe_prefix: ".setup-test-".to_string(),
        }
    }
}

/// Report persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Report path, relative to the project root.
    pub path: PathBuf,

    /// Whether the report is written at all.
    pub enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("setup-verification-report.json"),
            enabled: true,
        }
    }
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_editors() -> Vec<EditorConfig> {
    [
        ("VS Code", "code", true),
        ("PyCharm", "pycharm", true),
        ("Sublime Text", "subl", false),
        ("Vim", "vim", false),
        ("Nano", "nano", false),
    ]
    .into_iter()
    .map(|(name, program, recommended)| EditorConfig {
        name: name.to_string(),
        command: strings(&[program, "--version"]),
        recommended,
    })
    .collect()
}

fn default_env_files() -> Vec<EnvFileConfig> {
    vec![
        EnvFileConfig {
            path: PathBuf::from("course-template/.env.example"),
            required: false,
            description: "Environment template".to_string(),
        },
        EnvFileConfig {
            path: PathBuf::from("course-template/.gitignore"),
            required: true,
            description: "Git ignore file".to_string(),
        },
    ]
}

fn default_optional_tools() -> Vec<ToolConfig> {
    vec![
        ToolConfig::new("Node.js", &["node", "--version"]),
        ToolConfig::new("npm", &["npm", "--version"]),
        ToolConfig::new("Java", &["java", "-version"]),
        ToolConfig::new("Docker", &["docker", "--version"]),
        ToolConfig::new("curl", &["curl", "--version"]),
        ToolConfig::new("wget", &["wget", "--version"]),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
