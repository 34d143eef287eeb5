//! Program execution for tool probes.
//!
//! Probes run programs directly (no shell) so a missing executable is
//! reported as a spawn error rather than a shell "command not found".

use crate::error::{EnvcheckError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

/// How long output may keep arriving once the program has exited or been
/// killed. A descendant that inherited the pipes can hold them open forever.
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(1);

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the program, or output it left behind, outlived its bounds.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a program that ran out of time.
    pub fn timeout(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: None,
            stdout,
            stderr,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Timeout (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Execute a program with arguments, capturing its output.
///
/// Returns `Err(ToolMissing)` when the program cannot be spawned at all.
/// With a timeout set, the call returns within the timeout plus
/// [`OUTPUT_COLLECTION_TIMEOUT`] even if descendants keep the pipes open.
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let mut child = cmd.spawn().map_err(|e| EnvcheckError::ToolMissing {
        tool: program.to_string(),
        message: e.to_string(),
    })?;

    // Drain both pipes while waiting so a chatty child cannot block on a
    // full pipe.
    let stdout_rx = spawn_reader(child.stdout.take());
    let stderr_rx = spawn_reader(child.stderr.take());

    let status = match options.timeout {
        Some(limit) => child.wait_timeout(limit)?,
        None => Some(child.wait()?),
    };

    if status.is_none() {
        tracing::debug!("{} exceeded {:?}, killing", program, options.timeout);
        let _ = child.kill();
        let _ = child.wait();
    }

    let deadline = Instant::now() + OUTPUT_COLLECTION_TIMEOUT;
    let stdout = collect(&stdout_rx, deadline);
    let stderr = collect(&stderr_rx, deadline);

    match (status, stdout, stderr) {
        (Some(status), Some(stdout), Some(stderr)) if status.success() => {
            Ok(CommandResult::success(stdout, stderr))
        }
        (Some(status), Some(stdout), Some(stderr)) => {
            Ok(CommandResult::failure(status.code(), stdout, stderr))
        }
        (status, stdout, stderr) => {
            if status.is_some() {
                tracing::debug!("{} exited but its output pipes stayed open", program);
            }
            Ok(CommandResult::timeout(
                stdout.unwrap_or_default(),
                stderr.unwrap_or_default(),
            ))
        }
    }
}

/// Read a pipe to the end on its own thread.
fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    match pipe {
        Some(mut pipe) => {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = pipe.read_to_end(&mut buf);
                let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
            });
        }
        None => {
            let _ = tx.send(String::new());
        }
    }
    rx
}

/// Wait for a reader until `deadline`; `None` if it is still blocked.
fn collect(rx: &mpsc::Receiver<String>, deadline: Instant) -> Option<String> {
    rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn with_timeout(limit: Duration) -> CommandOptions {
        CommandOptions {
            timeout: Some(limit),
            ..Default::default()
        }
    }

    #[test]
    fn missing_program_is_tool_missing() {
        let result = execute(
            "this-command-does-not-exist-12345",
            &[],
            &CommandOptions::default(),
        );
        assert!(matches!(result, Err(EnvcheckError::ToolMissing { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_program() {
        let result = execute("echo", &args(&["hello"]), &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_program() {
        let result = execute("sh", &args(&["-c", "exit 3"]), &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(!result.timed_out);
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stderr() {
        let result = execute(
            "sh",
            &args(&["-c", "echo oops >&2"]),
            &CommandOptions::default(),
        )
        .unwrap();

        assert!(result.stderr.contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_kills_program_after_timeout() {
        let start = Instant::now();
        let result = execute("sleep", &args(&["5"]), &with_timeout(Duration::from_millis(200)))
            .unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_holds_when_grandchild_keeps_pipes_open() {
        // `sh` forks `sleep`, which inherits stdout/stderr and survives
        // the kill of its parent.
        let start = Instant::now();
        let result = execute(
            "sh",
            &args(&["-c", "sleep 8; true"]),
            &with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        assert!(result.timed_out);
        assert!(
            start.elapsed() < Duration::from_secs(4),
            "returned after {:?}",
            start.elapsed()
        );
    }

    #[cfg(unix)]
    #[test]
    fn background_grandchild_after_exit_counts_as_timed_out() {
        let start = Instant::now();
        let result = execute(
            "sh",
            &args(&["-c", "sleep 8 & echo started"]),
            &with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn execute_respects_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = execute("ls", &[], &options).unwrap();
        assert!(result.stdout.contains("marker.txt"));
    }
}
