//! Detailed results table.

use console::{measure_text_width, pad_str, Alignment};

use super::icons::StatusKind;
use super::theme::EnvcheckTheme;
use crate::checks::CheckResult;

const HEADERS: [&str; 3] = ["Status", "Category", "Details"];

/// Box-drawn table of check results: status, category, details.
#[derive(Debug)]
pub struct ResultsTable {
    rows: Vec<CheckResult>,
    widths: [usize; 3],
}

impl ResultsTable {
    pub fn new(results: &[CheckResult]) -> Self {
        let mut widths = HEADERS.map(measure_text_width);
        for result in results {
            widths[0] = widths[0].max(result.status.label().len());
            widths[1] = widths[1].max(measure_text_width(&result.category));
            widths[2] = widths[2].max(measure_text_width(&result.details));
        }
        Self {
            rows: results.to_vec(),
            widths,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with status cells colored by the theme.
    pub fn render(&self, theme: &EnvcheckTheme) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border(theme, '┌', '┬', '┐'));
        lines.push(self.row(theme, HEADERS.map(|h| theme.highlight.apply_to(h).to_string())));
        lines.push(self.border(theme, '├', '┼', '┤'));
        for result in &self.rows {
            let kind = StatusKind::from(result.status);
            lines.push(self.row(
                theme,
                [
                    kind.style(theme).apply_to(result.status.label()).to_string(),
                    result.category.clone(),
                    result.details.clone(),
                ],
            ));
        }
        lines.push(self.border(theme, '└', '┴', '┘'));
        lines.join("\n")
    }

    fn border(&self, theme: &EnvcheckTheme, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let line = format!("{}{}{}", left, segments.join(&mid.to_string()), right);
        theme.border.apply_to(line).to_string()
    }

    fn row(&self, theme: &EnvcheckTheme, cells: [String; 3]) -> String {
        let bar = theme.border.apply_to("│").to_string();
        let mut line = bar.clone();
        for (cell, width) in cells.iter().zip(self.widths) {
            line.push(' ');
            line.push_str(&pad_str(cell, width, Alignment::Left, None));
            line.push(' ');
            line.push_str(&bar);
        }
        line
    }
}
