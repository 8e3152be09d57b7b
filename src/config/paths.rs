//! Path management for the wallet CLI
//!
//! ## Path Resolution Order
//!
//! 1. `WALLET_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wallet-cli` or `~/.config/wallet-cli`
//! 3. Windows: `%APPDATA%\wallet-cli`

use std::path::PathBuf;

use crate::error::WalletError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WALLET_CLI_DATA_DIR";

/// Manages all paths used by the wallet CLI
#[derive(Debug, Clone)]
pub struct WalletPaths {
    base_dir: PathBuf,
}

impl WalletPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WalletPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the `accounts/payments/favorites.dump` snapshot
    pub fn dump_dir(&self) -> PathBuf {
        self.base_dir.join("dump")
    }

    /// Default target for account history chunks
    pub fn history_dir(&self) -> PathBuf {
        self.base_dir.join("history")
    }

    /// Default single-file account snapshot
    pub fn account_snapshot_file(&self) -> PathBuf {
        self.base_dir.join("accounts.snapshot")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and dump directories exist
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.dump_dir())
            .map_err(|e| WalletError::Io(format!("Failed to create dump directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| WalletError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("wallet-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WalletError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WalletError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wallet-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.dump_dir(), temp_dir.path().join("dump"));
        assert_eq!(paths.history_dir(), temp_dir.path().join("history"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().join("wallet"));

        paths.ensure_directories().unwrap();

        assert!(paths.dump_dir().is_dir());
    }
}
