//! Preference keys and their default values.

/// Whether the one-time alias installation offer has been declined.
pub const SKIP_ALIAS_CHECK_KEY: &str = "skipAliasCheck";

/// Remote that share branches are pushed to and taken from.
pub const REMOTE_KEY: &str = "remote";

/// Branch that taken share branches are merged into.
pub const MERGE_TARGET_KEY: &str = "mergeTarget";

/// Namespace for share branch names (`<prefix>/<n>`).
pub const BRANCH_PREFIX_KEY: &str = "branchPrefix";

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_MERGE_TARGET: &str = "master";
pub const DEFAULT_BRANCH_PREFIX: &str = "share";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "git-share";

/// File name of the preference record.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "GIT_SHARE_CONFIG_DIR";
