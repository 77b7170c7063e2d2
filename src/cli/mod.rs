//! CLI argument parsing for git-share.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The workflows themselves live in the `commands` module.

use clap::{Parser, Subcommand};

/// git-share: hand uncommitted changes to a teammate through a throwaway branch.
///
/// `share` pushes your working-tree changes to a new `share/<n>` branch and
/// leaves your checkout as it was. `take` merges the newest share branch into
/// your tree as uncommitted changes and deletes it from the remote.
#[derive(Parser, Debug)]
#[command(name = "git-share")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Do not offer to install the `git share` / `git take` aliases on this run.
    #[arg(long, global = true)]
    pub no_alias_check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command; `share` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.unwrap_or(Command::Share)
    }
}

/// Available commands for git-share.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Push uncommitted changes to a new share branch.
    ///
    /// Creates `share/<n>`, commits everything (hooks skipped), pushes it,
    /// then switches back to the original branch and deletes the local copy.
    Share,

    /// Merge a share branch into your working tree as uncommitted changes.
    ///
    /// Prompts for a branch when several exist, newest first. The remote
    /// share branch is deleted afterwards.
    Take,
}
