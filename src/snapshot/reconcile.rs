//! Merging decoded records into a live ledger
//!
//! Each entity kind is updated in place when its id is already known and
//! inserted otherwise. Accounts are inserted through registration and get a
//! fresh id; payments and favorites keep the id found in the dump.

use tracing::{debug, warn};

use crate::error::WalletResult;
use crate::ledger::Ledger;
use crate::models::{Account, Favorite, Payment};

/// Counts of what an import did to the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub accounts_created: usize,
    pub accounts_updated: usize,
    pub payments_created: usize,
    pub payments_updated: usize,
    /// Payments whose account does not exist
    pub payments_skipped: usize,
    pub favorites_created: usize,
    pub favorites_updated: usize,
    /// Favorites with no matching payment
    pub favorites_dropped: usize,
}

impl ImportSummary {
    pub fn total_accounts(&self) -> usize {
        self.accounts_created + self.accounts_updated
    }
}

pub(crate) fn account(
    ledger: &mut Ledger,
    record: Account,
    summary: &mut ImportSummary,
) -> WalletResult<()> {
    if ledger.find_account_by_id(record.id).is_ok() {
        ledger.overwrite_account(record.id, &record.phone, record.balance)?;
        summary.accounts_updated += 1;
    } else {
        let created = ledger.register_with_balance(&record.phone, record.balance)?;
        if created.id != record.id {
            debug!(dumped = %record.id, assigned = %created.id, "account re-registered under a new id");
        }
        summary.accounts_created += 1;
    }
    Ok(())
}

pub(crate) fn payment(
    ledger: &mut Ledger,
    record: Payment,
    summary: &mut ImportSummary,
) -> WalletResult<()> {
    if let Ok(existing) = ledger.payment_mut(&record.id) {
        existing.amount = record.amount;
        existing.category = record.category;
        existing.status = record.status;
        summary.payments_updated += 1;
        return Ok(());
    }

    if ledger.find_account_by_id(record.account_id).is_err() {
        warn!(
            payment = %record.id,
            account = %record.account_id,
            "account not found, skipping payment; add accounts.dump to the set"
        );
        summary.payments_skipped += 1;
        return Ok(());
    }

    ledger.restore_payment(record)?;
    summary.payments_created += 1;
    Ok(())
}

pub(crate) fn favorite(ledger: &mut Ledger, record: Favorite, summary: &mut ImportSummary) {
    if let Ok(existing) = ledger.favorite_mut(&record.id) {
        existing.account_id = record.account_id;
        existing.amount = record.amount;
        existing.name = record.name;
        existing.category = record.category;
        summary.favorites_updated += 1;
        return;
    }

    let has_source = ledger.payments().iter().any(|p| {
        p.account_id == record.account_id
            && p.amount == record.amount
            && p.category == record.category
    });
    if !has_source {
        debug!(favorite = %record.id, "no matching payment, dropping favorite");
        summary.favorites_dropped += 1;
        return;
    }

    ledger.restore_favorite(record);
    summary.favorites_created += 1;
}
