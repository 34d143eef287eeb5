//! Configuration file discovery and loading.
//!
//! Resolution order:
//! 1. An explicit path (`--config` / `ENVCHECK_CONFIG`), which must exist
//! 2. `.envcheck.yml` in the project root
//! 3. Built-in defaults

use crate::config::schema::VerifyConfig;
use crate::error::{EnvcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".envcheck.yml";

/// Find the config file that applies to a project, if any.
pub fn find_config(project_root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        if !path.is_file() {
            return Err(EnvcheckError::ConfigNotFound { path });
        }
        return Ok(Some(path));
    }

    let discovered = project_root.join(CONFIG_FILE_NAME);
    Ok(discovered.is_file().then_some(discovered))
}

/// Load and validate the configuration for a project.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<VerifyConfig> {
    let config = match find_config(project_root, explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            VerifyConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Parse a single config file.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| EnvcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configurations that no check could run with.
pub fn validate(config: &VerifyConfig) -> Result<()> {
    let mut commands: Vec<(&str, &[String])> = vec![
        ("interpreter", config.interpreter.command.as_slice()),
        ("package_manager", config.package_manager.command.as_slice()),
        ("vcs", config.vcs.command.as_slice()),
        (
            "dependencies.resolve_command",
            config.dependencies.resolve_command.as_slice(),
        ),
    ];
    for editor in &config.editors {
        commands.push(("editors", editor.command.as_slice()));
    }
    for tool in &config.optional_tools {
        commands.push(("optional_tools", tool.command.as_slice()));
    }

    for (field, command) in commands {
        if command.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(EnvcheckError::ConfigValidationError {
                message: format!("'{}' needs a non-empty command", field),
            });
        }
    }

    if !config
        .dependencies
        .resolve_command
        .iter()
        .any(|arg| arg.contains("{name}"))
    {
        return Err(EnvcheckError::ConfigValidationError {
            message: "'dependencies.resolve_command' must contain a {name} placeholder".to_string(),
        });
    }

    if crate::probe::Version::parse(&config.interpreter.minimum_version).is_none() {
        return Err(EnvcheckError::ConfigValidationError {
            message: format!(
                "'interpreter.minimum_version' is not a version: {}",
                config.interpreter.minimum_version
            ),
        });
    }

    if config.network.timeout_secs == 0 || config.probe_timeout_secs == 0 {
        return Err(EnvcheckError::ConfigValidationError {
            message: "timeouts must be at least one second".to_string(),
        });
    }

    if config.permissions.probe_prefix.contains(['/', '\\']) {
        return Err(EnvcheckError::ConfigValidationError {
            message: "'permissions.probe_prefix' must be a plain file name prefix".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_config_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, VerifyConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "network:\n  timeout_secs: 2\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.network.timeout_secs, 2);
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("missing.yml")));
        assert!(matches!(result, Err(EnvcheckError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_relative_path_resolves_against_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ci.yml"), "disabled_checks: [network]\n").unwrap();

        let found = find_config(temp.path(), Some(Path::new("ci.yml"))).unwrap();
        assert_eq!(found, Some(temp.path().join("ci.yml")));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "network: [unclosed\n").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, EnvcheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn empty_command_is_rejected() {
        let mut config = VerifyConfig::default();
        config.package_manager.command.clear();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("package_manager"));
    }

    #[test]
    fn resolve_command_needs_placeholder() {
        let mut config = VerifyConfig::default();
        config.dependencies.resolve_command = vec!["pip".into(), "check".into()];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn unparsable_minimum_version_is_rejected() {
        let mut config = VerifyConfig::default();
        config.interpreter.minimum_version = "latest".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = VerifyConfig::default();
        config.network.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&VerifyConfig::default()).is_ok());
    }
}
