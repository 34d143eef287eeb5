//! Optional tools survey. Always informational.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::ToolConfig;
use crate::error::Result;
use crate::probe::ToolProbe;

#[derive(Debug)]
pub struct OptionalToolsCheck {
    tools: Vec<(String, ToolProbe)>,
}

impl OptionalToolsCheck {
    pub fn new(tools: &[ToolConfig]) -> Self {
        Self {
            tools: tools
                .iter()
                .filter_map(|tool| {
                    ToolProbe::from_command(&tool.command).map(|probe| (tool.name.clone(), probe))
                })
                .collect(),
        }
    }
}

impl Check for OptionalToolsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::OptionalTools
    }

    fn category(&self) -> &str {
        "Optional Tools"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let mut findings = Vec::new();
        let mut found = Vec::new();

        for (name, probe) in &self.tools {
            if probe.execute(ctx.runner).is_ok() {
                findings.push(Finding::pass(format!("{}: Available", name)));
                found.push(name.as_str());
            } else {
                findings.push(Finding::info(format!("{}: Not found (optional)", name)));
            }
        }

        let details = if found.is_empty() {
            "Optional tools checked (none found)".to_string()
        } else {
            format!("Optional tools checked (found: {})", found.join(", "))
        };
        Ok(CheckOutcome::new(CheckStatus::Info, details).with_findings(findings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::Harness;
    use crate::probe::testing::FakeRunner;

    #[test]
    fn always_info_listing_found_tools() {
        let dir = tempfile::tempdir().unwrap();
        let tools = vec![
            ToolConfig::new("Node.js", &["node", "--version"]),
            ToolConfig::new("Docker", &["docker", "--version"]),
            ToolConfig::new("curl", &["curl", "--version"]),
        ];
        let runner = FakeRunner::new()
            .succeed("node --version", "v20.11.0")
            .succeed("curl --version", "curl 8.5.0");

        let outcome = Harness::new(dir.path())
            .runner(runner)
            .run(&OptionalToolsCheck::new(&tools))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Info));
        assert_eq!(
            outcome.details(),
            "Optional tools checked (found: Node.js, curl)"
        );
        assert_eq!(outcome.findings[1].message, "Docker: Not found (optional)");
    }

    #[test]
    fn nothing_found_is_still_info() {
        let dir = tempfile::tempdir().unwrap();
        let tools = vec![ToolConfig::new("Java", &["java", "-version"])];
        let outcome = Harness::new(dir.path())
            .run(&OptionalToolsCheck::new(&tools))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Info));
    }
}
