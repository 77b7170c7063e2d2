//! Global `alias.*` entries in the user's git config.

use super::GitRepo;
use crate::error::{Result, ShareError};
use crate::git::run_git_unchecked;

impl GitRepo {
    /// `git config --global alias.<name>`; exit status 1 means the key is unset.
    pub(super) fn read_global_alias(&self, name: &str) -> Result<Option<String>> {
        let key = format!("alias.{}", name);
        let exit = run_git_unchecked(&self.root, &self.envs, &["config", "--global", &key])?;

        match exit.code {
            0 => Ok(Some(exit.output.stdout)),
            1 => Ok(None),
            code => Err(ShareError::GitError(format!(
                "git config failed (exit code {}): {}",
                code, exit.output.stderr
            ))),
        }
    }

    pub(super) fn write_global_alias(&self, name: &str, value: &str) -> Result<()> {
        let key = format!("alias.{}", name);
        self.git(&["config", "--global", &key, value])?;
        Ok(())
    }
}
