//! One-time offer to install `git share` / `git take` aliases.
//!
//! Offered only when the tool was launched through a package runner (so the
//! user has no short way to invoke it yet), the user has not declined before,
//! and `alias.share` is not configured. Declining persists `skipAliasCheck`.
//! The installed aliases re-launch the tool the same way it was launched.

use crate::config::{PreferenceStore, Preferences};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::repo::Vcs;
use std::path::Path;
use tracing::debug;

/// Executables that run a package's binary without installing it on PATH.
pub const PACKAGE_RUNNERS: &[&str] = &["npx", "bunx", "pnpx", "cargo"];

/// Name the JS package runners resolve.
pub const PACKAGE_NAME: &str = "git-share";

/// Environment variable holding the path of the invoking executable (set by the shell).
pub const INVOKER_ENV: &str = "_";

pub const ALIAS_PROMPT: &str = "Install git aliases \"git share\" and \"git take\"?";

/// Alias names, each mapped to the subcommand of the same name.
pub const ALIAS_SUBCOMMANDS: &[&str] = &["share", "take"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOffer {
    NotOffered,
    Installed,
    Declined,
}

/// The package runner `invoker` (a path) names, if any.
pub fn package_runner(invoker: &str) -> Option<&str> {
    Path::new(invoker)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| PACKAGE_RUNNERS.contains(stem))
}

/// Shell command that launches this tool again, given how it was invoked.
///
/// JS runners fetch the package by name (`npx git-share`). `cargo run` leaves
/// nothing on PATH, so the running binary is referenced by its absolute path.
/// `None` when the invoker is not a package runner or the binary path is unknown.
pub fn launch_command(invoker: Option<&str>, current_exe: Option<&Path>) -> Option<String> {
    match package_runner(invoker?)? {
        "cargo" => current_exe.map(|exe| shell_words::quote(&exe.to_string_lossy()).into_owned()),
        runner => Some(format!("{} {}", runner, PACKAGE_NAME)),
    }
}

/// `(alias name, alias value)` pairs for the global git config.
pub fn alias_commands(launch: &str) -> Vec<(&'static str, String)> {
    ALIAS_SUBCOMMANDS
        .iter()
        .map(|sub| (*sub, format!("!{} {}", launch, sub)))
        .collect()
}

/// Offer the aliases when `launch` (see [`launch_command`]) is known.
pub fn offer_alias_install(
    vcs: &dyn Vcs,
    prompter: &dyn Prompter,
    prefs: &mut Preferences,
    store: &PreferenceStore,
    launch: Option<&str>,
) -> Result<AliasOffer> {
    let Some(launch) = launch else {
        debug!("not launched through a package runner");
        return Ok(AliasOffer::NotOffered);
    };
    if prefs.skip_alias_check() || vcs.global_alias(ALIAS_SUBCOMMANDS[0])?.is_some() {
        return Ok(AliasOffer::NotOffered);
    }

    if prompter.confirm(ALIAS_PROMPT)? {
        for (name, command) in alias_commands(launch) {
            vcs.set_global_alias(name, &command)?;
        }
        println!(
            "🤩 Success! Now you can share your changes with ✨git share✨ and get changes from others with ✨git take✨!"
        );
        Ok(AliasOffer::Installed)
    } else {
        prefs.set_skip_alias_check(true);
        store.save(prefs)?;
        Ok(AliasOffer::Declined)
    }
}
