//! Write permission check.
//!
//! Creates a uniquely named file in the project root, writes to it, reads
//! it back and deletes it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::PermissionsConfig;
use crate::error::{EnvcheckError, Result};

const PROBE_CONTENT: &str = "test";

#[derive(Debug)]
pub struct PermissionsCheck {
    prefix: String,
}

impl PermissionsCheck {
    pub fn new(config: &PermissionsConfig) -> Self {
        Self {
            prefix: config.probe_prefix.clone(),
        }
    }
}

/// Create, write, read back and delete a probe file in `root`.
///
/// The error carries the path that failed: the probe file, or the prefix
/// inside `root` when the file could not be created at all.
fn round_trip(root: &Path, prefix: &str) -> std::result::Result<(), (PathBuf, io::Error)> {
    round_trip_with(root, prefix, |file| file.write_all(PROBE_CONTENT.as_bytes()))
}

fn round_trip_with<W>(
    root: &Path,
    prefix: &str,
    write: W,
) -> std::result::Result<(), (PathBuf, io::Error)>
where
    W: FnOnce(&mut fs::File) -> io::Result<()>,
{
    // The temp file is deleted on drop, so early returns leave nothing behind.
    let mut probe = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(root)
        .map_err(|e| (root.join(prefix), e))?;
    let path = probe.path().to_path_buf();
    let at_probe = |e: io::Error| (path.clone(), e);

    write(probe.as_file_mut())
        .and_then(|()| probe.as_file_mut().flush())
        .map_err(at_probe)?;

    let read = fs::read_to_string(&path).map_err(at_probe)?;
    if read != PROBE_CONTENT {
        return Err(at_probe(io::Error::new(
            io::ErrorKind::InvalidData,
            "read back different content",
        )));
    }

    probe.close().map_err(at_probe)
}

impl Check for PermissionsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Permissions
    }

    fn category(&self) -> &str {
        "File Permissions"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        match round_trip(ctx.project_root, &self.prefix) {
            Ok(()) => Ok(
                CheckOutcome::new(CheckStatus::Pass, "Write permissions available")
                    .with_findings(vec![Finding::pass("File write permissions: OK")]),
            ),
            Err((path, source)) => {
                let err = EnvcheckError::PermissionDenied { path, source };
                tracing::debug!("{}", err);
                Ok(CheckOutcome::new(CheckStatus::Fail, err.to_string())
                    .with_findings(vec![Finding::fail(format!("File permission issue: {}", err))]))
            }
        }
    }
}
