//! User settings for the wallet CLI
//!
//! Chunk sizes used by the history exporter and the aggregation helpers.

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum payments per history chunk file
    #[serde(default = "default_history_chunk_size")]
    pub history_chunk_size: usize,

    /// Payments per part when summing with progress
    #[serde(default = "default_progress_chunk_size")]
    pub progress_chunk_size: usize,

    /// Worker threads for sums and filters
    #[serde(default = "default_aggregate_workers")]
    pub aggregate_workers: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_history_chunk_size() -> usize {
    3
}

fn default_progress_chunk_size() -> usize {
    10
}

fn default_aggregate_workers() -> usize {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            history_chunk_size: default_history_chunk_size(),
            progress_chunk_size: default_progress_chunk_size(),
            aggregate_workers: default_aggregate_workers(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| WalletError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.history_chunk_size == 0 || settings.progress_chunk_size == 0 {
            return Err(WalletError::Config(
                "chunk sizes in settings must be greater than 0".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
