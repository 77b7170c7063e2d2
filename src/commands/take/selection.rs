//! Choosing which share branch to take.

use crate::config::Preferences;
use crate::error::Result;
use crate::prompt::{Choice, Prompter, select_choice};
use crate::repo::{CommitInfo, Vcs, strip_remote_prefix};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt::Display;

pub const SELECT_PROMPT: &str = "Which share branch?";

/// Weekday, month, day, and 12-hour time, e.g. `Tue, Oct 15, 2:03 PM`.
const CHOICE_DATE_FORMAT: &str = "%a, %b %-d, %-I:%M %p";

/// A share branch as offered in the picker. `value` is the remote-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchChoice {
    pub choice: Choice<String>,
    pub date: DateTime<FixedOffset>,
}

/// `"share/42" - by Alice - on Tue, Oct 15, 2:03 PM`
pub fn format_choice_label<Tz: TimeZone>(short_name: &str, author: &str, date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "\"{}\" - by {} - on {}",
        short_name,
        author,
        date.format(CHOICE_DATE_FORMAT)
    )
}

pub fn build_choice(remote: &str, full_name: &str, info: &CommitInfo) -> BranchChoice {
    let short_name = strip_remote_prefix(remote, full_name);
    let local_date = info.date.with_timezone(&Local);

    BranchChoice {
        choice: Choice {
            label: format_choice_label(short_name, &info.author, &local_date),
            value: full_name.to_string(),
        },
        date: info.date,
    }
}

/// Newest first. Branches with equal dates keep their listing order.
pub fn sort_newest_first(choices: &mut [BranchChoice]) {
    choices.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Pick the remote-qualified share branch to take.
///
/// No branches gives `None`; a single branch is used without prompting;
/// several are looked up, sorted newest first, and offered to the user.
pub fn select_branch(
    vcs: &dyn Vcs,
    prompter: &dyn Prompter,
    prefs: &Preferences,
) -> Result<Option<String>> {
    let pattern = format!("{}/{}/*", prefs.remote(), prefs.branch_prefix());
    let mut names = vcs.list_remote_branches(&pattern)?;

    match names.len() {
        0 => Ok(None),
        1 => Ok(names.pop()),
        _ => {
            let mut choices = names
                .iter()
                .map(|name| -> Result<BranchChoice> {
                    let info = vcs.show_commit_info(name)?;
                    Ok(build_choice(prefs.remote(), name, &info))
                })
                .collect::<Result<Vec<_>>>()?;
            sort_newest_first(&mut choices);

            let options: Vec<Choice<String>> = choices.into_iter().map(|c| c.choice).collect();
            let picked = select_choice(prompter, SELECT_PROMPT, &options)?;
            Ok(Some(picked.clone()))
        }
    }
}
