//! Operator settings with load-at-startup / save-on-change persistence.
//!
//! Settings are an explicitly passed value, not process-global state; the
//! surface layer owns the current copy and writes it back through
//! [`SettingsStore`] whenever it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Mutable operator-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// When enabled, ad-hoc statements containing destructive keywords are
    /// rejected before any connection is attempted.
    pub safe_mode: bool,
    /// Name of the server pre-selected in clients.
    pub preferred_server: Option<String>,
    /// Last path used for a saved-query export, informational only.
    pub last_export_path: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            safe_mode: true,
            preferred_server: None,
            last_export_path: None,
        }
    }
}

/// JSON-file-backed settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, falling back to defaults when the file does
    /// not exist yet.
    pub fn load(&self) -> Result<AppSettings, CoreError> {
        if !self.path.exists() {
            return Ok(AppSettings::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| CoreError::Internal(format!("Failed to read settings file: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Internal(format!("Failed to parse settings file: {e}")))
    }

    /// Persist settings, creating parent directories as needed.
    pub fn save(&self, settings: &AppSettings) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Internal(format!("Failed to create settings dir: {e}")))?;
        }
        let raw = serde_json::to_string_pretty(settings)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| CoreError::Internal(format!("Failed to write settings file: {e}")))?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
