//! Author and date extraction from `git show` header blocks.

use super::GitRepo;
use crate::error::{Result, ShareError};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;

/// Matches `Label:   value` header lines of the medium pretty format.
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>[A-Za-z]+):\s+(?P<value>.*?)\s*$").expect("valid header regex")
});

/// Git's default `--date` format, e.g. `Tue Oct 15 14:03:11 2026 +0200`.
const GIT_DEFAULT_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// Who made the tip commit of a ref and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// First word of the author name.
    pub author: String,
    pub date: DateTime<FixedOffset>,
}

/// Parse the header block printed by `git show --no-patch`.
///
/// Labels are located by name, so a `Merge:` line before `Author:` is fine.
/// Parsing stops at the first blank line, where the commit message begins.
pub fn parse_commit_info(text: &str) -> Result<CommitInfo> {
    let mut author = None;
    let mut date = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        let Some(caps) = HEADER_LINE.captures(line) else {
            continue;
        };
        let value = &caps["value"];
        match &caps["label"] {
            "Author" => author = Some(parse_author(value)?),
            "Date" => date = Some(parse_date(value)?),
            _ => {}
        }
    }

    match (author, date) {
        (Some(author), Some(date)) => Ok(CommitInfo { author, date }),
        (None, _) => Err(ShareError::ParseError(
            "commit header has no Author line".to_string(),
        )),
        (_, None) => Err(ShareError::ParseError(
            "commit header has no Date line".to_string(),
        )),
    }
}

fn parse_author(value: &str) -> Result<String> {
    value
        .split(' ')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ShareError::ParseError(format!("empty author in '{}'", value)))
}

fn parse_date(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_str(value, GIT_DEFAULT_DATE_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map_err(|e| ShareError::ParseError(format!("invalid commit date '{}': {}", value, e)))
}

impl GitRepo {
    pub(super) fn commit_info(&self, reference: &str) -> Result<CommitInfo> {
        let output = self.git(&["show", "--no-patch", "--date=rfc2822", reference])?;
        parse_commit_info(&output.stdout)
    }
}
