//! Preference store for git-share.
//!
//! A single JSON object at `<config dir>/git-share/config.json` holding user
//! preferences such as `skipAliasCheck`. The record is loaded once at startup
//! into a [`Preferences`] value and written back only when it changes.
//! Unknown keys survive a read-modify-write.

mod model;
mod operations;
mod types;


pub use model::Preferences;
pub use operations::PreferenceStore;
pub use types::*;
