//! Git command runner for git-share.
//!
//! Provides a wrapper around the `git` binary with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{Result, ShareError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, warn};

/// Environment override applied to every git invocation so that hook managers
/// installed in the repository stay out of the way of share commits.
pub const HOOK_SKIP_ENV: (&str, &str) = ("HUSKY_SKIP_HOOKS", "1");

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// A finished git invocation, successful or not.
#[derive(Debug, Clone)]
pub struct GitExit {
    /// Process exit code (`-1` if killed by a signal).
    pub code: i32,
    pub output: GitOutput,
}

impl GitExit {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run a git command and return its exit status without treating a
/// non-zero code as an error.
///
/// Only failure to spawn `git` at all is reported as `Err`.
pub fn run_git_unchecked<P: AsRef<Path>>(
    cwd: P,
    envs: &[(String, String)],
    args: &[&str],
) -> Result<GitExit> {
    let cwd = cwd.as_ref();
    debug!(cwd = %cwd.display(), args = ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .env(HOOK_SKIP_ENV.0, HOOK_SKIP_ENV.1)
        .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .args(args)
        .output()
        .map_err(|e| {
            ShareError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok(GitExit {
        code: output.status.code().unwrap_or(-1),
        output: GitOutput::from_output(&output),
    })
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `envs` - Extra environment variables for this invocation
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(ShareError::GitError)` - On non-zero exit code, carrying git's own message
pub fn run_git<P: AsRef<Path>>(
    cwd: P,
    envs: &[(String, String)],
    args: &[&str],
) -> Result<GitOutput> {
    let exit = run_git_unchecked(cwd, envs, args)?;

    if exit.success() {
        return Ok(exit.output);
    }

    let error_msg = if exit.output.stderr.is_empty() {
        exit.output.stdout.clone()
    } else {
        exit.output.stderr.clone()
    };
    warn!(args = ?args, code = exit.code, "git command failed");

    Err(ShareError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit.code,
        error_msg
    )))
}
