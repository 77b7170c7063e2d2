//! Locating, loading, and saving the preference file.

use super::model::Preferences;
use super::types::*;
use crate::error::{Result, ShareError};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle on the preference file location.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store whose file is `<dir>/config.json`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(CONFIG_FILE_NAME),
        }
    }

    /// Resolve the per-user store.
    ///
    /// Uses `$GIT_SHARE_CONFIG_DIR` when set, otherwise
    /// `<platform config dir>/git-share`.
    pub fn locate() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::in_dir(PathBuf::from(dir)));
        }

        let base = dirs::config_dir().ok_or_else(|| {
            ShareError::ConfigError(
                "could not determine the user configuration directory".to_string(),
            )
        })?;
        Ok(Self::in_dir(base.join(APP_DIR_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and an empty `{}` record if they do not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "initializing preference file");
        atomic_write_file(&self.path, "{}")
    }

    /// Read the whole record, initializing the file on first use.
    pub fn load(&self) -> Result<Preferences> {
        self.ensure_exists()?;

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ShareError::ConfigError(format!(
                "failed to read preference file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Preferences::from_json(&content)
    }

    /// Replace the whole record. Last writer wins.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let json = prefs.to_json()?;
        debug!(path = %self.path.display(), "saving preferences");
        atomic_write_file(&self.path, &json)
    }

    /// Read-modify-write a single key.
    pub fn set(&self, key: &str, value: impl Into<serde_json::Value>) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.set(key, value);
        self.save(&prefs)
    }

    /// Read a single key from the file on disk.
    pub fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.load()?.get(key).cloned())
    }
}
