//! Single-file account snapshot
//!
//! Accounts only, each written as `id;phone;balance|` with no newlines in
//! between. On import trailing whitespace and the final `|` are dropped
//! before splitting.

use std::path::Path;

use tracing::info;

use super::file_io::{read_required, write_records};
use super::reconcile::{self, ImportSummary};
use super::record::DumpRecord;
use crate::error::WalletResult;
use crate::ledger::Ledger;
use crate::models::Account;

pub const RECORD_SEPARATOR: char = '|';

/// Write every account to `path`, replacing any existing file
pub fn export_to_file<P: AsRef<Path>>(ledger: &Ledger, path: P) -> WalletResult<()> {
    let path = path.as_ref();
    write_records(
        path,
        ledger
            .accounts()
            .iter()
            .map(|a| format!("{}{}", a.to_record(), RECORD_SEPARATOR)),
    )?;

    info!(path = %path.display(), accounts = ledger.accounts().len(), "exported account snapshot");
    Ok(())
}

/// Read accounts from `path` and merge them into the ledger
///
/// Any malformed record aborts the import; records before it have already
/// been applied.
pub fn import_from_file<P: AsRef<Path>>(ledger: &mut Ledger, path: P) -> WalletResult<ImportSummary> {
    let path = path.as_ref();
    let content = read_required(path)?;
    let content = content.trim_end();
    let content = content.strip_suffix(RECORD_SEPARATOR).unwrap_or(content);

    let mut summary = ImportSummary::default();
    if !content.is_empty() {
        for (index, raw) in content.split(RECORD_SEPARATOR).enumerate() {
            let location = format!("{}#{}", path.display(), index + 1);
            let record = Account::parse_record(raw, &location)?;
            reconcile::account(ledger, record, &mut summary)?;
        }
    }
    ledger.resync_account_counter();

    info!(path = %path.display(), accounts = summary.total_accounts(), "imported account snapshot");
    Ok(summary)
}
