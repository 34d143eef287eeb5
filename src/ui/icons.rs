//! Status icons shared by every output surface.

use super::theme::EnvcheckTheme;
use crate::checks::CheckStatus;

/// Display kinds for check statuses and findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Failed,
    Warning,
    Info,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
            Self::Info => "[info]",
        }
    }

    /// The theme style for this kind.
    pub fn style(self, theme: &EnvcheckTheme) -> &console::Style {
        match self {
            Self::Success => &theme.success,
            Self::Failed => &theme.error,
            Self::Warning => &theme.warning,
            Self::Info => &theme.info,
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &EnvcheckTheme) -> String {
        self.style(theme).apply_to(self.icon()).to_string()
    }

    /// Styled icon followed by the message.
    pub fn format(self, theme: &EnvcheckTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Bracketed label followed by the message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => Self::Success,
            CheckStatus::Fail => Self::Failed,
            CheckStatus::Warning => Self::Warning,
            CheckStatus::Info => Self::Info,
        }
    }
}
