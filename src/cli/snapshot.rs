//! Snapshot CLI commands
//!
//! Explicit export/import in either format, independent of the session's
//! own dump directory.

use std::path::PathBuf;

use clap::Subcommand;

use super::Session;
use crate::error::WalletResult;
use crate::snapshot::{directory, single_file, ImportSummary};

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Write all accounts to a single file
    ExportAccounts {
        /// Target file (defaults to accounts.snapshot in the data directory)
        file: Option<PathBuf>,
    },
    /// Merge accounts from a single-file snapshot
    ImportAccounts {
        /// Source file (defaults to accounts.snapshot in the data directory)
        file: Option<PathBuf>,
    },
    /// Write accounts, payments and favorites dump files into a directory
    Export {
        /// Target directory
        dir: PathBuf,
    },
    /// Merge accounts, payments and favorites from a dump directory
    Import {
        /// Source directory
        dir: PathBuf,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(session: &mut Session, cmd: SnapshotCommands) -> WalletResult<()> {
    match cmd {
        SnapshotCommands::ExportAccounts { file } => {
            let path = file.unwrap_or_else(|| session.paths.account_snapshot_file());
            session.paths.ensure_directories()?;
            single_file::export_to_file(&session.ledger, &path)?;
            println!(
                "Exported {} account(s) to {}",
                session.ledger.accounts().len(),
                path.display()
            );
        }

        SnapshotCommands::ImportAccounts { file } => {
            let path = file.unwrap_or_else(|| session.paths.account_snapshot_file());
            let summary = single_file::import_from_file(&mut session.ledger, &path)?;
            session.mark_dirty();
            print_summary(&summary);
        }

        SnapshotCommands::Export { dir } => {
            crate::snapshot::file_io::ensure_dir(&dir)?;
            directory::export(&session.ledger, &dir)?;
            println!("Exported snapshot to {}", dir.display());
        }

        SnapshotCommands::Import { dir } => {
            let summary = directory::import(&mut session.ledger, &dir)?;
            session.mark_dirty();
            print_summary(&summary);
        }
    }

    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    println!("Import complete");
    println!(
        "  Accounts:  {} created, {} updated",
        summary.accounts_created, summary.accounts_updated
    );
    println!(
        "  Payments:  {} created, {} updated, {} skipped",
        summary.payments_created, summary.payments_updated, summary.payments_skipped
    );
    println!(
        "  Favorites: {} created, {} updated, {} dropped",
        summary.favorites_created, summary.favorites_updated, summary.favorites_dropped
    );
}
