//! Visual theme and styling.

use console::Style;

/// Colors and emphasis used across envcheck output.
#[derive(Debug, Clone)]
pub struct EnvcheckTheme {
    /// Passed checks (green).
    pub success: Style,
    /// Warnings (yellow).
    pub warning: Style,
    /// Failures (red bold).
    pub error: Style,
    /// Informational rows (cyan).
    pub info: Style,
    /// Secondary text.
    pub dim: Style,
    /// Bold emphasis.
    pub highlight: Style,
    /// Section headers (cyan bold).
    pub header: Style,
    /// Box-drawing borders.
    pub border: Style,
    /// Labels in key-value lines.
    pub key: Style,
}

impl Default for EnvcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvcheckTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
    }

    /// A section header, underlined with `=`.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.border.apply_to("=".repeat(title.chars().count()))
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term() && console::colors_enabled()
}
