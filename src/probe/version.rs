//! Version extraction and comparison.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

static RE_BARE_MAJOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^v?(\d+)$").unwrap());

/// A `major.minor.patch` version; missing components are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version requirement such as `3.8`, `3.8.1` or `16`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(caps) = RE_BARE_MAJOR.captures(s) {
            return Some(Self::new(caps[1].parse().ok()?, 0, 0));
        }
        extract_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Extract the first dotted version from tool output.
///
/// Handles `Python 3.11.4`, `v18.17.0`, `git version 2.43.0` and
/// `go1.22.1 linux/amd64`.
pub fn extract_version(output: &str) -> Option<Version> {
    let caps = RE_VERSION.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some(Version::new(major, minor, patch))
}
