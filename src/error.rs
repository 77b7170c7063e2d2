//! Error types for the git-share CLI.
//!
//! Uses thiserror for derive macros. Failures reported by git are carried
//! verbatim so the user sees exactly what git said.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-share operations.
#[derive(Error, Debug)]
pub enum ShareError {
    /// User provided invalid arguments or the repository is in a state we refuse to touch.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Output from git could not be interpreted.
    #[error("Could not parse git output: {0}")]
    ParseError(String),

    /// The preference file could not be read, parsed, or written.
    #[error("Preference file error: {0}")]
    ConfigError(String),

    /// The interactive prompt failed (e.g. no terminal attached).
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// A workflow step failed; earlier steps are left as they completed.
    #[error("step \"{step}\" failed (last completed step: {}): {source}", .last_completed.as_deref().unwrap_or("none"))]
    StepFailed {
        step: String,
        last_completed: Option<String>,
        #[source]
        source: Box<ShareError>,
    },
}

impl ShareError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShareError::UserError(_) => exit_codes::USER_ERROR,
            ShareError::GitError(_) => exit_codes::GIT_FAILURE,
            ShareError::ParseError(_) => exit_codes::PARSE_FAILURE,
            ShareError::ConfigError(_) | ShareError::PromptError(_) => {
                exit_codes::ENVIRONMENT_FAILURE
            }
            ShareError::StepFailed { source, .. } => source.exit_code(),
        }
    }
}

impl From<dialoguer::Error> for ShareError {
    fn from(err: dialoguer::Error) -> Self {
        ShareError::PromptError(err.to_string())
    }
}

/// Result type alias for git-share operations.
pub type Result<T> = std::result::Result<T, ShareError>;
