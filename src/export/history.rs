//! Account history export
//!
//! Pulls one account's payments out of the ledger and writes them as one or
//! more chunk files using the same line format as `payments.dump`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{WalletError, WalletResult};
use crate::ledger::Ledger;
use crate::models::{AccountId, Payment};
use crate::snapshot::file_io::{ensure_dir, write_records};
use crate::snapshot::DumpRecord;

/// Copy every payment of an account, in ledger order
pub fn export_account_history(ledger: &Ledger, account_id: AccountId) -> WalletResult<Vec<Payment>> {
    ledger.find_account_by_id(account_id)?;
    Ok(ledger
        .payments()
        .iter()
        .filter(|p| p.account_id == account_id)
        .cloned()
        .collect())
}

/// Name of the `index`-th chunk file; index 0 means "everything fits in one"
pub fn chunk_file_name(index: usize) -> String {
    if index == 0 {
        "payments.dump".to_string()
    } else {
        format!("payments{}.dump", index)
    }
}

/// Write `payments` into `dir`, at most `max_records_per_file` per file
///
/// If everything fits, a single `payments.dump` is written. Otherwise the
/// records go to `payments1.dump`, `payments2.dump`, ... with the remainder
/// in the last file. Returns the written paths in sequence order;
/// concatenating them reproduces `payments`.
pub fn history_to_file<P: AsRef<Path>>(
    payments: &[Payment],
    dir: P,
    max_records_per_file: usize,
) -> WalletResult<Vec<PathBuf>> {
    if max_records_per_file == 0 {
        return Err(WalletError::InvalidChunkSize);
    }

    let dir = dir.as_ref();
    ensure_dir(dir)?;

    let mut written = Vec::new();
    if payments.len() <= max_records_per_file {
        written.push(write_chunk(dir, 0, payments)?);
    } else {
        for (offset, chunk) in payments.chunks(max_records_per_file).enumerate() {
            written.push(write_chunk(dir, offset + 1, chunk)?);
        }
    }

    info!(
        dir = %dir.display(),
        payments = payments.len(),
        files = written.len(),
        "wrote payment history"
    );
    Ok(written)
}

fn write_chunk(dir: &Path, index: usize, chunk: &[Payment]) -> WalletResult<PathBuf> {
    let path = dir.join(chunk_file_name(index));
    write_records(&path, chunk.iter().map(|p| format!("{}\n", p.to_record())))?;
    Ok(path)
}
