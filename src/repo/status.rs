//! Working-tree status from `git status --porcelain=v2 --branch`.

use super::GitRepo;
use crate::error::Result;

/// Snapshot of the repository state the workflows branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    /// Checked-out branch, `None` on a detached HEAD.
    pub current_branch: Option<String>,
    /// Upstream of the current branch, e.g. `origin/master`.
    pub upstream: Option<String>,
    /// No staged, unstaged, or untracked changes.
    pub is_clean: bool,
}

impl RepoStatus {
    pub fn is_tracking(&self) -> bool {
        self.upstream.is_some()
    }

    /// Parse porcelain v2 output produced with `--branch`.
    pub fn parse(porcelain: &str) -> Self {
        let mut current_branch = None;
        let mut upstream = None;
        let mut is_clean = true;

        for line in porcelain.lines() {
            if let Some(header) = line.strip_prefix("# ") {
                if let Some(head) = header.strip_prefix("branch.head ") {
                    if head != "(detached)" {
                        current_branch = Some(head.to_string());
                    }
                } else if let Some(up) = header.strip_prefix("branch.upstream ") {
                    upstream = Some(up.to_string());
                }
            } else if !line.trim().is_empty() {
                is_clean = false;
            }
        }

        Self {
            current_branch,
            upstream,
            is_clean,
        }
    }
}

impl GitRepo {
    pub(super) fn read_status(&self) -> Result<RepoStatus> {
        let output = self.git(&[
            "status",
            "--porcelain=v2",
            "--branch",
            "--untracked-files=all",
        ])?;
        Ok(RepoStatus::parse(&output.stdout))
    }
}
