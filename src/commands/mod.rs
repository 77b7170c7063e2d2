//! Command implementations for git-share.
//!
//! [`dispatch`] resolves the repository and preferences once, offers the
//! alias installation, and routes to the share or take workflow.

pub mod alias;
pub mod share;
pub mod take;

use crate::cli::{Cli, Command};
use crate::config::PreferenceStore;
use crate::error::{Result, ShareError};
use crate::prompt::TerminalPrompter;
use crate::repo::GitRepo;
use std::env;

/// Dispatch the parsed command line to its workflow.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        ShareError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let repo = GitRepo::open(&cwd)?;
    let store = PreferenceStore::locate()?;
    let mut prefs = store.load()?;
    let prompter = TerminalPrompter;

    if !cli.no_alias_check {
        let invoker = env::var(alias::INVOKER_ENV).ok();
        let current_exe = env::current_exe().ok();
        let launch = alias::launch_command(invoker.as_deref(), current_exe.as_deref());
        alias::offer_alias_install(&repo, &prompter, &mut prefs, &store, launch.as_deref())?;
    }

    match cli.resolved_command() {
        Command::Share => share::cmd_share(&repo, &prefs).map(|_| ()),
        Command::Take => take::cmd_take(&repo, &prompter, &prefs).map(|_| ()),
    }
}
