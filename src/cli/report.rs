//! History export and payment sums

use std::path::PathBuf;

use super::Session;
use crate::display::format_progress;
use crate::error::WalletResult;
use crate::export::{export_account_history, history_to_file};
use crate::ledger::Progress;
use crate::models::AccountId;

/// Write an account's payment history as chunk files
pub fn handle_history_command(
    session: &Session,
    account: AccountId,
    dir: Option<PathBuf>,
    chunk: Option<usize>,
) -> WalletResult<()> {
    let dir = dir.unwrap_or_else(|| session.paths.history_dir());
    let chunk = chunk.unwrap_or(session.settings.history_chunk_size);

    let history = export_account_history(&session.ledger, account)?;
    let written = history_to_file(&history, &dir, chunk)?;

    println!(
        "Wrote {} payment(s) of account {} to {} file(s):",
        history.len(),
        account,
        written.len()
    );
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Print per-chunk payment sums and the grand total
pub fn handle_sum_command(session: &Session, chunk: Option<usize>) -> WalletResult<()> {
    let chunk = chunk.unwrap_or(session.settings.progress_chunk_size);

    let workers = session.settings.aggregate_workers;

    let mut parts: Vec<Progress> = session
        .ledger
        .sum_payments_with_progress(chunk, workers)?
        .iter()
        .collect();
    parts.sort_by_key(|p| p.part);

    print!("{}", format_progress(&parts));
    Ok(())
}
