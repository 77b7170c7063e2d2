//! Implementation of `git-share share`.
//!
//! Moves the working-tree changes onto a fresh `<prefix>/<n>` branch, pushes
//! it, and returns to the original branch with the local copy deleted. The
//! working tree is left without the shared changes; they now live only on the
//! remote branch.

use crate::config::Preferences;
use crate::error::{Result, ShareError};
use crate::pipeline::Pipeline;
use crate::repo::Vcs;
use rand::Rng;
use tracing::info;

/// Commit message used for share commits.
pub const SHARE_COMMIT_MESSAGE: &str = "💙 Sharing";

/// Highest number used in generated share branch names (inclusive).
pub const MAX_SHARE_NUMBER: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The working tree was clean; nothing was created or pushed.
    NothingToShare,
    /// Changes were pushed to this branch.
    Shared { branch: String },
}

/// `<prefix>/<n>` with `n` uniformly drawn from `0..=1000`.
pub fn generate_share_branch_name<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    format!("{}/{}", prefix, rng.random_range(0..=MAX_SHARE_NUMBER))
}

pub fn cmd_share(vcs: &dyn Vcs, prefs: &Preferences) -> Result<ShareOutcome> {
    share_with_rng(vcs, prefs, &mut rand::rng())
}

pub(crate) fn share_with_rng<R: Rng + ?Sized>(
    vcs: &dyn Vcs,
    prefs: &Preferences,
    rng: &mut R,
) -> Result<ShareOutcome> {
    let status = vcs.status()?;
    if status.is_clean {
        println!("\n🤨 No changes to share\n");
        return Ok(ShareOutcome::NothingToShare);
    }

    let original_branch = status.current_branch.ok_or_else(|| {
        ShareError::UserError(
            "HEAD is detached. Check out a branch before sharing so it can be restored afterwards."
                .to_string(),
        )
    })?;
    let share_branch = generate_share_branch_name(prefs.branch_prefix(), rng);
    let remote = prefs.remote();
    info!(branch = %share_branch, from = %original_branch, "sharing changes");

    Pipeline::new("share")
        .step(
            "create share branch",
            format!("Checking out new branch: \"{}\"", share_branch),
            || vcs.checkout_new_branch(&share_branch),
        )
        .step("stage changes", "Adding all changes", || vcs.stage_all())
        .step("commit", "Committing", || {
            vcs.commit_no_verify(SHARE_COMMIT_MESSAGE)
        })
        .step("push", "Pushing", || {
            vcs.push_set_upstream(remote, &share_branch)
        })
        .step(
            "restore original branch",
            format!("Checking out \"{}\"", original_branch),
            || vcs.checkout(&original_branch),
        )
        .step(
            "delete local share branch",
            format!("Deleting local share branch \"{}\"", share_branch),
            || vcs.delete_local_branch(&share_branch),
        )
        .run()?;

    println!("\n🤝 Shared branch: \"{}\"\n", share_branch);
    Ok(ShareOutcome::Shared {
        branch: share_branch,
    })
}
