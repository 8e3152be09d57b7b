//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger. Every invocation works on a
//! [`Session`]: the directory snapshot is imported on open and written back
//! on close if a command changed anything.

pub mod account;
pub mod favorite;
pub mod payment;
pub mod report;
pub mod snapshot;

pub use account::{handle_account_command, AccountCommands};
pub use favorite::{handle_favorite_command, FavoriteCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use report::{handle_history_command, handle_sum_command};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};

use crate::config::{Settings, WalletPaths};
use crate::error::WalletResult;
use crate::ledger::Ledger;
use crate::snapshot::directory;

/// A ledger loaded from the dump directory
pub struct Session {
    pub paths: WalletPaths,
    pub settings: Settings,
    pub ledger: Ledger,
    dirty: bool,
}

impl Session {
    /// Import the snapshot under `paths.dump_dir()` into a fresh ledger
    pub fn open(paths: WalletPaths, settings: Settings) -> WalletResult<Self> {
        let mut ledger = Ledger::new();
        if paths.dump_dir().is_dir() {
            directory::import(&mut ledger, paths.dump_dir())?;
        }

        Ok(Self {
            paths,
            settings,
            ledger,
            dirty: false,
        })
    }

    /// Record that the ledger must be written back
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the snapshot back if anything changed
    pub fn close(self) -> WalletResult<()> {
        if self.dirty {
            self.paths.ensure_directories()?;
            directory::export(&self.ledger, self.paths.dump_dir())?;
        }
        Ok(())
    }
}
