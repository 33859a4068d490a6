//! Spawning and waiting on `git` child processes.
//!
//! Two execution modes: [`run`] streams the child's output straight to the
//! caller's terminal and reports the exit code, [`capture`] pipes stdout back
//! for in-process post-processing. stderr is inherited in both modes so git's
//! own diagnostics always reach the user unmodified.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A captured git command exited with a non-zero status.
    ///
    /// stderr is inherited during capture, so the child's diagnostics have
    /// already reached the terminal by the time this is returned.
    #[error("git command failed (exit code {code:?})")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
    },
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute a `git` command with all standard streams inherited.
///
/// Returns the child's exit code once it terminates. A non-zero exit is not
/// an error at this layer: the dispatcher decides whether to abort a
/// composite or simply propagate the code to its own caller. A child killed
/// by a signal reports code 1.
///
/// # Errors
///
/// Returns [`GitError::Spawn`] if `git` cannot be found or started.
pub fn run(args: &[String], cwd: &Path) -> Result<i32> {
    debug!(?args, "running git");
    let status = Command::new("git").args(args).current_dir(cwd).status()?;
    Ok(status.code().unwrap_or(1))
}

/// Execute a `git` command with stdout piped and return its output.
///
/// stderr stays inherited so git's diagnostics reach the terminal even while
/// the output itself is being post-processed.
///
/// # Errors
///
/// Returns [`GitError::Spawn`] if `git` cannot be started, or
/// [`GitError::CommandFailed`] if it exits with a non-zero status.
pub fn capture(args: &[String], cwd: &Path) -> Result<String> {
    debug!(?args, "capturing git");
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stderr(Stdio::inherit())
        .output()?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(s: &str) -> Vec<String> {
        vec![s.to_string()]
    }

    #[test]
    fn capture_version() {
        // `git --version` should succeed on any system with git installed.
        let result = capture(&arg("--version"), Path::new("."));
        assert!(result.is_ok(), "git --version failed: {result:?}");
        let output = result.unwrap();
        assert!(
            output.starts_with("git version"),
            "unexpected output: {output}"
        );
    }

    #[test]
    fn capture_failure_carries_exit_code() {
        // An invalid git subcommand should fail.
        let result = capture(&arg("not-a-real-subcommand"), Path::new("."));
        match result.unwrap_err() {
            GitError::CommandFailed { code } => assert!(code.is_some()),
            other => panic!("expected CommandFailed, got: {other:?}"),
        }
    }

    #[test]
    fn run_reports_exit_code() {
        // `run` must not turn a non-zero exit into an error.
        let code = run(&arg("not-a-real-subcommand"), Path::new(".")).unwrap();
        assert_ne!(code, 0);

        let code = run(&arg("--version"), Path::new(".")).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn bad_cwd_is_a_spawn_error() {
        let result = run(&arg("--version"), Path::new("/nonexistent/directory/xyz"));
        assert!(matches!(result, Err(GitError::Spawn(_))));
    }
}
