//! Exit code constants for the git-share CLI.
//!
//! - 0: Success (including "nothing to share" and "no sharing branches found")
//! - 1: User error (bad args, invalid repository state)
//! - 2: Git operation failure
//! - 3: Preference file or terminal prompt failure
//! - 4: Unparseable output from git

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a repository state we refuse to work from.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: checkout, commit, push, merge, reset errors.
pub const GIT_FAILURE: i32 = 2;

/// The preference file could not be read or written, or the prompt failed.
pub const ENVIRONMENT_FAILURE: i32 = 3;

/// Git produced output we could not interpret.
pub const PARSE_FAILURE: i32 = 4;
