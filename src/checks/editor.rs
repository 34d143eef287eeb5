//! Code editor presence check.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::probe::ToolProbe;

#[derive(Debug)]
struct Candidate {
    name: String,
    recommended: bool,
    probe: ToolProbe,
}

/// Passes on the first editor that answers; warns when none does.
#[derive(Debug)]
pub struct EditorCheck {
    candidates: Vec<Candidate>,
}

impl EditorCheck {
    pub fn new(editors: &[EditorConfig]) -> Self {
        let candidates = editors
            .iter()
            .filter_map(|editor| {
                ToolProbe::from_command(&editor.command).map(|probe| Candidate {
                    name: editor.name.clone(),
                    recommended: editor.recommended,
                    probe,
                })
            })
            .collect();
        Self { candidates }
    }

    fn recommended_names(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| c.recommended)
            .map(|c| c.name.as_str())
            .collect()
    }
}

impl Check for EditorCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Editor
    }

    fn category(&self) -> &str {
        "Code Editor"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        for candidate in &self.candidates {
            if candidate.probe.execute(ctx.runner).is_ok() {
                let note = if candidate.recommended {
                    " (Recommended)"
                } else {
                    ""
                };
                return Ok(CheckOutcome::new(
                    CheckStatus::Pass,
                    format!("{} available", candidate.name),
                )
                .with_findings(vec![Finding::pass(format!(
                    "{} found{}",
                    candidate.name, note
                ))]));
            }
        }

        let recommended = self.recommended_names();
        let hint = if recommended.is_empty() {
            "No recognized code editor found".to_string()
        } else {
            format!(
                "No recognized code editor found. We recommend {}",
                recommended.join(" or ")
            )
        };
        Ok(CheckOutcome::new(CheckStatus::Warning, "No editor detected")
            .with_findings(vec![Finding::warning(hint)]))
    }
}
