//! Preference record definition and typed accessors.

use super::types::*;
use crate::error::{Result, ShareError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User preferences, stored as a flat JSON object.
///
/// Keys are kept as raw JSON so that `get` reports absent keys as `None`
/// and keys written by other versions of the tool are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: Map<String, Value>,
}

impl Preferences {
    /// Parse a preference record. Empty or whitespace-only input is an empty record.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        let prefs: Preferences = serde_json::from_str(json).map_err(|e| {
            ShareError::ConfigError(format!("failed to parse preferences JSON: {}", e))
        })?;

        prefs.validate()?;
        Ok(prefs)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ShareError::ConfigError(format!("failed to serialize preferences: {}", e))
        })
    }

    /// Stored value for `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn skip_alias_check(&self) -> bool {
        self.get(SKIP_ALIAS_CHECK_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn set_skip_alias_check(&mut self, skip: bool) {
        self.set(SKIP_ALIAS_CHECK_KEY, skip);
    }

    pub fn remote(&self) -> &str {
        self.string_or(REMOTE_KEY, DEFAULT_REMOTE)
    }

    pub fn merge_target(&self) -> &str {
        self.string_or(MERGE_TARGET_KEY, DEFAULT_MERGE_TARGET)
    }

    pub fn branch_prefix(&self) -> &str {
        self.string_or(BRANCH_PREFIX_KEY, DEFAULT_BRANCH_PREFIX)
    }

    fn string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Reject values the workflows cannot use.
    ///
    /// - `skipAliasCheck` must be a boolean
    /// - `remote`, `mergeTarget`, `branchPrefix` must be non-empty strings without whitespace
    /// - `branchPrefix` must not start or end with `/`
    pub fn validate(&self) -> Result<()> {
        if let Some(value) = self.get(SKIP_ALIAS_CHECK_KEY)
            && !value.is_boolean()
        {
            return Err(ShareError::ConfigError(format!(
                "{} must be true or false (found {})",
                SKIP_ALIAS_CHECK_KEY, value
            )));
        }

        for key in [REMOTE_KEY, MERGE_TARGET_KEY, BRANCH_PREFIX_KEY] {
            let Some(value) = self.get(key) else {
                continue;
            };
            let Some(name) = value.as_str() else {
                return Err(ShareError::ConfigError(format!(
                    "{} must be a string (found {})",
                    key, value
                )));
            };
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ShareError::ConfigError(format!(
                    "{} must be a non-empty name without whitespace (found '{}')",
                    key, name
                )));
            }
        }

        let prefix = self.branch_prefix();
        if prefix.starts_with('/') || prefix.ends_with('/') {
            return Err(ShareError::ConfigError(format!(
                "{} must not start or end with '/' (found '{}'). Use '{}' instead.",
                BRANCH_PREFIX_KEY,
                prefix,
                prefix.trim_matches('/')
            )));
        }

        Ok(())
    }
}
