//! Current branch lookup through the `git` command line tool.
//!
//! The lookup runs `git rev-parse --abbrev-ref HEAD` in the workspace and reads a
//! single trimmed line. It is bounded by a timeout so a stuck git process can not
//! hang the caller; on expiry the child is killed.

use crate::core::error::{Result, ScratchpadError};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const GIT: &str = "git";
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Default upper bound for the branch lookup
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Read the checked-out branch of the repository containing `cwd`.
///
/// Returns `Ok(None)` for a detached HEAD and `ExternalToolUnavailable` when git
/// is missing, fails, or does not answer within `timeout`.
pub fn current_branch(cwd: &Path, timeout: Duration) -> Result<Option<String>> {
    current_branch_with(Path::new(GIT), cwd, timeout)
}

/// [`current_branch`] with an explicit git executable
pub fn current_branch_with(
    program: &Path,
    cwd: &Path,
    timeout: Duration,
) -> Result<Option<String>> {
    let tool = program.display().to_string();
    let unavailable = |reason: String| ScratchpadError::external_tool_unavailable(&tool, reason);

    let mut child = Command::new(program)
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| unavailable(e.to_string()))?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(unavailable(format!("no answer within {}ms", timeout.as_millis())));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => return Err(unavailable(e.to_string())),
        }
    }

    let output = child.wait_with_output().map_err(|e| unavailable(e.to_string()))?;

    if !output.status.success() {
        return Err(unavailable(format!("exited with {}", output.status)));
    }

    Ok(parse_branch(&String::from_utf8_lossy(&output.stdout)))
}

/// Interpret the output of `git rev-parse --abbrev-ref HEAD`
pub fn parse_branch(stdout: &str) -> Option<String> {
    let branch = stdout.lines().next().unwrap_or("").trim();
    match branch {
        "" | "HEAD" => None,
        name => Some(name.to_string()),
    }
}
