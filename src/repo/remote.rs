//! Remote operations: push, pull, fetch, and remote-tracking branch listing.

use super::GitRepo;
use crate::error::Result;

impl GitRepo {
    pub(super) fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.git(&["push", "--set-upstream", remote, branch])?;
        Ok(())
    }

    pub(super) fn push_delete(&self, remote: &str, branch: &str) -> Result<()> {
        self.git(&["push", remote, "--delete", branch])?;
        Ok(())
    }

    /// Pull the tracked branch, pruning remote-tracking refs deleted on the remote.
    pub(super) fn pull_tracking(&self) -> Result<()> {
        self.git(&["pull", "--prune"])?;
        Ok(())
    }

    /// Fetch only the refs matched by `refspec`, pruning remote-tracking refs
    /// under its destination that no longer exist on the remote.
    pub(super) fn fetch_with_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        self.git(&["fetch", "--prune", remote, refspec])?;
        Ok(())
    }

    pub(super) fn remote_branches_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let output = self.git(&[
            "branch",
            "--remotes",
            "--list",
            pattern,
            "--format=%(refname:short)",
        ])?;

        Ok(output
            .lines()
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Strip the leading `<remote>/` from a remote-tracking branch name.
///
/// `origin/share/42` becomes `share/42`. Names without the prefix are
/// returned unchanged.
pub fn strip_remote_prefix<'a>(remote: &str, name: &'a str) -> &'a str {
    name.strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name)
}
