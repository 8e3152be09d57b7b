//! Directory snapshot
//!
//! One newline-delimited file per entity kind: `accounts.dump`,
//! `payments.dump` and `favorites.dump`. Import order matters: payments need
//! their accounts, favorites need a matching payment.

use std::path::{Path, PathBuf};

use tracing::info;

use super::file_io::{read_dump_lines, write_records};
use super::reconcile::{self, ImportSummary};
use super::record::DumpRecord;
use crate::error::{WalletError, WalletResult};
use crate::ledger::Ledger;

pub const ACCOUNTS_FILE: &str = "accounts.dump";
pub const PAYMENTS_FILE: &str = "payments.dump";
pub const FAVORITES_FILE: &str = "favorites.dump";

fn lines_of<'a, T: DumpRecord + 'a>(
    records: impl IntoIterator<Item = &'a T> + 'a,
) -> impl Iterator<Item = String> + 'a {
    records.into_iter().map(|r| format!("{}\n", r.to_record()))
}

/// Write the three dump files into `dir`
///
/// A ledger without accounts writes nothing at all.
pub fn export<P: AsRef<Path>>(ledger: &Ledger, dir: P) -> WalletResult<()> {
    let dir = dir.as_ref();
    if ledger.is_empty() {
        info!(dir = %dir.display(), "ledger has no accounts, nothing to export");
        return Ok(());
    }

    write_records(dir.join(ACCOUNTS_FILE), lines_of(ledger.accounts()))?;
    write_records(dir.join(PAYMENTS_FILE), lines_of(ledger.payments()))?;
    write_records(dir.join(FAVORITES_FILE), lines_of(ledger.favorites()))?;

    info!(
        dir = %dir.display(),
        accounts = ledger.accounts().len(),
        payments = ledger.payments().len(),
        favorites = ledger.favorites().len(),
        "exported snapshot"
    );
    Ok(())
}

/// Decode every non-blank line of `path`, feeding records to `apply`
fn import_file<T, F>(path: PathBuf, mut apply: F) -> WalletResult<()>
where
    T: DumpRecord,
    F: FnMut(T) -> WalletResult<()>,
{
    for (index, line) in read_dump_lines(&path)?.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let location = format!("{}:{}", path.display(), index + 1);
        apply(T::parse_record(line, &location)?)?;
    }
    Ok(())
}

/// Merge the dump files found in `dir` into the ledger
///
/// Missing files count as empty. A malformed line aborts the whole import;
/// whatever was applied before it stays applied.
pub fn import<P: AsRef<Path>>(ledger: &mut Ledger, dir: P) -> WalletResult<ImportSummary> {
    let dir = dir.as_ref();
    let mut summary = ImportSummary::default();

    import_file(dir.join(ACCOUNTS_FILE), |record| {
        reconcile::account(ledger, record, &mut summary)
    })
    .map_err(|e| context("accounts", e))?;
    ledger.resync_account_counter();

    import_file(dir.join(PAYMENTS_FILE), |record| {
        reconcile::payment(ledger, record, &mut summary)
    })
    .map_err(|e| context("payments", e))?;

    import_file(dir.join(FAVORITES_FILE), |record| {
        reconcile::favorite(ledger, record, &mut summary);
        Ok(())
    })
    .map_err(|e| context("favorites", e))?;

    info!(dir = %dir.display(), ?summary, "imported snapshot");
    Ok(summary)
}

fn context(stage: &str, err: WalletError) -> WalletError {
    match err {
        WalletError::Io(msg) => WalletError::Io(format!("importing {}: {}", stage, msg)),
        other => other,
    }
}
