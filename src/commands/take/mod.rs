//! Implementation of `git-share take`.
//!
//! Brings the remote share branches up to date, picks one, merges it into the
//! merge target, turns the merge into staged uncommitted changes, and deletes
//! the share branch from the remote.

mod selection;


pub use selection::select_branch;

use crate::config::Preferences;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::prompt::Prompter;
use crate::repo::{Vcs, strip_remote_prefix};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeOutcome {
    /// No share branches exist on the remote; nothing was merged.
    NoBranches,
    /// The changes from this (short-named) branch are now staged locally.
    Taken { branch: String },
}

pub fn cmd_take(vcs: &dyn Vcs, prompter: &dyn Prompter, prefs: &Preferences) -> Result<TakeOutcome> {
    update_share_branches(vcs, prefs)?;

    let Some(full_name) = select_branch(vcs, prompter, prefs)? else {
        println!("\n😢  No sharing branches found\n");
        return Ok(TakeOutcome::NoBranches);
    };

    let remote = prefs.remote();
    let short_name = strip_remote_prefix(remote, &full_name).to_string();
    info!(branch = %full_name, target = prefs.merge_target(), "taking share branch");

    Pipeline::new("take")
        .step("merge", "Merging share branch", || {
            vcs.merge(&full_name, prefs.merge_target())
        })
        .step(
            "reset merge into working tree",
            "Resetting changes into working tree",
            || vcs.reset_soft_to_parent(),
        )
        .step("stage changes", "Adding changes to index", || vcs.stage_all())
        .step(
            "delete remote share branch",
            format!("Deleting remote branch \"{}\"", short_name),
            || vcs.delete_remote_branch(remote, &short_name),
        )
        .run()?;

    println!(
        "\n🤝 Changes fetched from shared branch \"{}\"\n",
        short_name
    );
    Ok(TakeOutcome::Taken { branch: short_name })
}

/// Pull when the current branch tracks a remote; otherwise fetch only the
/// share branches.
fn update_share_branches(vcs: &dyn Vcs, prefs: &Preferences) -> Result<()> {
    if vcs.status()?.is_tracking() {
        println!("Pulling");
        vcs.pull()
    } else {
        println!("Fetching sharing branches");
        vcs.fetch_refspec(prefs.remote(), &share_refspec(prefs))
    }
}

/// `refs/heads/<prefix>/*:refs/remotes/<remote>/<prefix>/*`
pub fn share_refspec(prefs: &Preferences) -> String {
    let prefix = prefs.branch_prefix();
    format!(
        "refs/heads/{}/*:refs/remotes/{}/{}/*",
        prefix,
        prefs.remote(),
        prefix
    )
}
