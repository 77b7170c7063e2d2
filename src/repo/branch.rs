//! Local branch, index, and commit operations.

use super::GitRepo;
use crate::error::Result;

impl GitRepo {
    pub(super) fn checkout_branch(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", branch])?;
        Ok(())
    }

    pub(super) fn create_and_checkout_branch(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", "-b", branch])?;
        Ok(())
    }

    pub(super) fn delete_branch(&self, branch: &str) -> Result<()> {
        self.git(&["branch", "-d", branch])?;
        Ok(())
    }

    pub(super) fn add_all(&self) -> Result<()> {
        self.git(&["add", "-A"])?;
        Ok(())
    }

    pub(super) fn commit_bypassing_hooks(&self, message: &str) -> Result<()> {
        self.git(&["commit", "--no-verify", "-m", message])?;
        Ok(())
    }

    /// `git merge <source> <target>`: merges both heads into the checked-out
    /// branch. When `target` is the checked-out branch this is a plain merge
    /// of `source`.
    pub(super) fn merge_from_to(&self, source: &str, target: &str) -> Result<()> {
        self.git(&["merge", "--no-edit", source, target])?;
        Ok(())
    }

    pub(super) fn reset_to_parent(&self) -> Result<()> {
        self.git(&["reset", "--soft", "HEAD^"])?;
        Ok(())
    }
}
