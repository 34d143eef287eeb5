//! Output verbosity.

/// How much a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including item-level findings.
    Verbose,
    /// Per-check progress and the full summary.
    #[default]
    Normal,
    /// Summary counts and errors only.
    Quiet,
    /// Errors only (used when stdout carries JSON).
    Silent,
}

impl OutputMode {
    /// Pick the mode from command-line flags. JSON output wins over everything.
    pub fn from_flags(verbose: bool, quiet: bool, json: bool) -> Self {
        if json {
            Self::Silent
        } else if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether item-level findings are shown.
    pub fn shows_findings(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether per-check spinners and progress lines are shown.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether the results table and next steps are shown.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether status messages are shown at all.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins() {
        assert_eq!(OutputMode::from_flags(true, true, true), OutputMode::Silent);
        assert_eq!(OutputMode::from_flags(true, true, false), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, false, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false, false), OutputMode::Normal);
    }

    #[test]
    fn only_verbose_shows_findings() {
        assert!(OutputMode::Verbose.shows_findings());
        assert!(!OutputMode::Normal.shows_findings());
        assert!(!OutputMode::Quiet.shows_findings());
    }

    #[test]
    fn quiet_hides_progress_but_keeps_status() {
        assert!(!OutputMode::Quiet.shows_progress());
        assert!(!OutputMode::Quiet.shows_details());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }
}
