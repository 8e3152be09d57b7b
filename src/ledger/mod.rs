//! Ledger core
//!
//! [`Ledger`] owns the three entity collections and the account id counter.
//! Every mutation goes through the operations defined in the submodules:
//!
//! - `account`: registration, deposits, counter resynchronisation
//! - `payment`: pay, reject, repeat
//! - `favorite`: favoriting a payment and paying from a favorite
//! - `aggregate`: read-only sums and filters over the payment list
//!
//! Lookups are linear scans. Collections are small and insertion order is
//! part of the contract (history export and dumps preserve it).

pub mod account;
pub mod aggregate;
pub mod favorite;
pub mod payment;

pub use aggregate::Progress;

use crate::error::{WalletError, WalletResult};
use crate::models::{Account, AccountId, Favorite, FavoriteId, Payment, PaymentId};

/// Characters the dump formats use as separators
pub const RESERVED_CHARS: [char; 4] = [';', '|', '\n', '\r'];

/// Reject free-form text that would split a dump record
pub(crate) fn check_text_field(field: &'static str, value: &str) -> WalletResult<()> {
    if value.contains(RESERVED_CHARS) {
        return Err(WalletError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// In-memory wallet ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
    /// Id handed to the most recent registration; the next one gets `+ 1`
    last_account_id: i64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All accounts in registration order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All payments in insertion order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// All favorites in insertion order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Find an account by id
    pub fn find_account_by_id(&self, id: AccountId) -> WalletResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| WalletError::account_not_found(id))
    }

    /// Find an account by phone
    pub fn find_account_by_phone(&self, phone: &str) -> WalletResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.phone == phone)
            .ok_or_else(|| WalletError::account_not_found(phone))
    }

    /// Find a payment by id
    pub fn find_payment_by_id(&self, id: &PaymentId) -> WalletResult<&Payment> {
        self.payments
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| WalletError::payment_not_found(id))
    }

    /// Find a favorite by id
    pub fn find_favorite_by_id(&self, id: &FavoriteId) -> WalletResult<&Favorite> {
        self.favorites
            .iter()
            .find(|f| &f.id == id)
            .ok_or_else(|| WalletError::favorite_not_found(id))
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> WalletResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| WalletError::account_not_found(id))
    }

    pub(crate) fn payment_mut(&mut self, id: &PaymentId) -> WalletResult<&mut Payment> {
        self.payments
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| WalletError::payment_not_found(id))
    }

    pub(crate) fn favorite_mut(&mut self, id: &FavoriteId) -> WalletResult<&mut Favorite> {
        self.favorites
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| WalletError::favorite_not_found(id))
    }

    /// Append an already-built payment, keeping its id
    ///
    /// Only the snapshot importer restores records this way; the referenced
    /// account must already exist.
    pub(crate) fn restore_payment(&mut self, payment: Payment) -> WalletResult<()> {
        self.find_account_by_id(payment.account_id)?;
        self.payments.push(payment);
        Ok(())
    }

    /// Append an already-built favorite, keeping its id
    pub(crate) fn restore_favorite(&mut self, favorite: Favorite) {
        self.favorites.push(favorite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_check_text_field() {
        assert!(check_text_field("phone", "917590333").is_ok());
        assert!(check_text_field("name", "Lunch with team").is_ok());

        for bad in ["a;b", "a|b", "a\nb", "a\rb"] {
            let err = check_text_field("category", bad).unwrap_err();
            assert!(matches!(err, WalletError::InvalidField { field: "category", .. }));
        }
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(ledger.payments().is_empty());
        assert!(ledger.favorites().is_empty());
    }

    #[test]
    fn test_lookups_report_not_found() {
        let ledger = Ledger::new();
        let err = ledger.find_account_by_id(AccountId::new(1)).unwrap_err();
        assert!(err.is_not_found_for(crate::error::Entity::Account));

        let err = ledger
            .find_payment_by_id(&PaymentId::from_raw("missing"))
            .unwrap_err();
        assert!(err.is_not_found_for(crate::error::Entity::Payment));

        let err = ledger
            .find_favorite_by_id(&FavoriteId::from_raw("favorite_missing"))
            .unwrap_err();
        assert!(err.is_not_found_for(crate::error::Entity::Favorite));
    }

    #[test]
    fn test_find_account_by_phone() {
        let mut ledger = Ledger::new();
        let account = ledger.register_account("917590330").unwrap();

        assert_eq!(ledger.find_account_by_phone("917590330").unwrap().id, account.id);
        assert!(ledger.find_account_by_phone("000").is_err());
    }

    #[test]
    fn test_restore_payment_requires_account() {
        let mut ledger = Ledger::new();
        let orphan = Payment::new(AccountId::new(9), Money::new(10), "food");
        assert!(ledger.restore_payment(orphan).is_err());
        assert!(ledger.payments().is_empty());
    }
}
