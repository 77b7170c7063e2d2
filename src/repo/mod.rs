//! Version-control adapter.
//!
//! [`Vcs`] names every git capability the share/take workflows need.
//! [`GitRepo`] implements it by shelling out to `git` through [`crate::git`];
//! each operation is a direct pass-through with fixed arguments.

mod alias;
mod branch;
mod commit_info;
mod remote;
mod status;

pub use commit_info::{CommitInfo, parse_commit_info};
pub use remote::strip_remote_prefix;
pub use status::RepoStatus;

use crate::error::{Result, ShareError};
use crate::git::{GitOutput, run_git, run_git_unchecked};
use std::path::{Path, PathBuf};

/// Operations the workflows perform against a repository.
pub trait Vcs {
    /// Working-tree cleanliness, current branch, and upstream.
    fn status(&self) -> Result<RepoStatus>;
    fn checkout(&self, branch: &str) -> Result<()>;
    fn checkout_new_branch(&self, branch: &str) -> Result<()>;
    /// Safe delete (`-d`); the branch must be merged into HEAD or its upstream.
    fn delete_local_branch(&self, branch: &str) -> Result<()>;
    fn merge(&self, source: &str, target: &str) -> Result<()>;
    fn pull(&self) -> Result<()>;
    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<()>;
    fn fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()>;
    /// Remote-tracking branch names matching `pattern`, remote prefix included.
    fn list_remote_branches(&self, pattern: &str) -> Result<Vec<String>>;
    fn show_commit_info(&self, reference: &str) -> Result<CommitInfo>;
    fn stage_all(&self) -> Result<()>;
    fn commit_no_verify(&self, message: &str) -> Result<()>;
    fn reset_soft_to_parent(&self) -> Result<()>;
    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()>;
    /// Value of `alias.<name>` in the global git config, if set.
    fn global_alias(&self, name: &str) -> Result<Option<String>>;
    fn set_global_alias(&self, name: &str, value: &str) -> Result<()>;
}

/// A git working tree driven through the `git` command line.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
    envs: Vec<(String, String)>,
}

impl GitRepo {
    /// Open the repository containing `cwd`.
    ///
    /// # Returns
    ///
    /// * `Ok(GitRepo)` - rooted at the top level of the working tree
    /// * `Err(ShareError::UserError)` - if `cwd` is not inside a git repository
    /// * `Err(ShareError::GitError)` - if `git` could not be run at all
    pub fn open<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let exit = run_git_unchecked(cwd, &[], &["rev-parse", "--show-toplevel"])?;
        if !exit.success() {
            return Err(ShareError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ));
        }

        Ok(Self {
            root: PathBuf::from(exit.output.stdout),
            envs: Vec::new(),
        })
    }

    /// Add an environment variable to every git invocation made through this repo.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git(&self, args: &[&str]) -> Result<GitOutput> {
        run_git(&self.root, &self.envs, args)
    }
}

impl Vcs for GitRepo {
    fn status(&self) -> Result<RepoStatus> {
        self.read_status()
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_branch(branch)
    }

    fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.create_and_checkout_branch(branch)
    }

    fn delete_local_branch(&self, branch: &str) -> Result<()> {
        self.delete_branch(branch)
    }

    fn merge(&self, source: &str, target: &str) -> Result<()> {
        self.merge_from_to(source, target)
    }

    fn pull(&self) -> Result<()> {
        self.pull_tracking()
    }

    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        self.push_branch(remote, branch)
    }

    fn fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        self.fetch_with_refspec(remote, refspec)
    }

    fn list_remote_branches(&self, pattern: &str) -> Result<Vec<String>> {
        self.remote_branches_matching(pattern)
    }

    fn show_commit_info(&self, reference: &str) -> Result<CommitInfo> {
        self.commit_info(reference)
    }

    fn stage_all(&self) -> Result<()> {
        self.add_all()
    }

    fn commit_no_verify(&self, message: &str) -> Result<()> {
        self.commit_bypassing_hooks(message)
    }

    fn reset_soft_to_parent(&self) -> Result<()> {
        self.reset_to_parent()
    }

    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.push_delete(remote, branch)
    }

    fn global_alias(&self, name: &str) -> Result<Option<String>> {
        self.read_global_alias(name)
    }

    fn set_global_alias(&self, name: &str, value: &str) -> Result<()> {
        self.write_global_alias(name, value)
    }
}
