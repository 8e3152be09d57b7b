//! Account operations
//!
//! Registration, deposits and the id counter.

use tracing::debug;

use super::{check_text_field, Ledger};
use crate::error::{WalletError, WalletResult};
use crate::models::{Account, AccountId, Money};

impl Ledger {
    /// Register a new account for `phone` with a zero balance
    ///
    /// Fails with [`WalletError::PhoneAlreadyRegistered`] if any account
    /// already uses the phone, and with [`WalletError::InvalidField`] if the
    /// phone contains a dump separator.
    pub fn register_account(&mut self, phone: &str) -> WalletResult<Account> {
        check_text_field("phone", phone)?;
        if self.accounts.iter().any(|a| a.phone == phone) {
            return Err(WalletError::PhoneAlreadyRegistered(phone.to_string()));
        }

        self.last_account_id += 1;
        let account = Account::new(AccountId::new(self.last_account_id), phone);
        self.accounts.push(account.clone());

        debug!(account = %account.id, phone, "registered account");
        Ok(account)
    }

    /// Credit `amount` to an account
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> WalletResult<()> {
        if !amount.is_positive() {
            return Err(WalletError::AmountMustBePositive(amount));
        }

        let account = self.account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(WalletError::AmountOverflow {
                account: account_id,
                balance: account.balance,
                amount,
            })?;
        Ok(())
    }

    /// Overwrite an existing account's phone and balance
    ///
    /// Used when a snapshot carries a record for an id that is already
    /// present. The phone must not belong to a different account.
    pub(crate) fn overwrite_account(
        &mut self,
        account_id: AccountId,
        phone: &str,
        balance: Money,
    ) -> WalletResult<()> {
        check_text_field("phone", phone)?;
        if self
            .accounts
            .iter()
            .any(|a| a.phone == phone && a.id != account_id)
        {
            return Err(WalletError::PhoneAlreadyRegistered(phone.to_string()));
        }

        let account = self.account_mut(account_id)?;
        account.phone = phone.to_string();
        account.balance = balance;
        Ok(())
    }

    /// Register `phone` and fund it with `balance`
    ///
    /// A zero balance skips the deposit, which would otherwise be rejected.
    pub(crate) fn register_with_balance(
        &mut self,
        phone: &str,
        balance: Money,
    ) -> WalletResult<Account> {
        let account = self.register_account(phone)?;
        if balance.is_positive() {
            self.deposit(account.id, balance)?;
        }
        self.find_account_by_id(account.id).cloned()
    }

    /// Make sure the next registration gets an id above every existing one
    ///
    /// Imports register unknown accounts under fresh ids, so the counter only
    /// falls behind when accounts are overwritten in place with higher ids.
    pub fn resync_account_counter(&mut self) {
        let max_id = self
            .accounts
            .iter()
            .map(|a| a.id.value())
            .max()
            .unwrap_or(0);
        self.last_account_id = self.last_account_id.max(max_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Entity;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut ledger = Ledger::new();
        let first = ledger.register_account("917590330").unwrap();
        let second = ledger.register_account("917590331").unwrap();

        assert_eq!(first.id, AccountId::new(1));
        assert_eq!(second.id, AccountId::new(2));
        assert_eq!(first.balance, Money::zero());
    }

    #[test]
    fn test_register_duplicate_phone_fails() {
        let mut ledger = Ledger::new();
        ledger.register_account("917590333").unwrap();

        let err = ledger.register_account("917590333").unwrap_err();
        assert!(matches!(err, WalletError::PhoneAlreadyRegistered(ref p) if p == "917590333"));
        assert_eq!(ledger.accounts().len(), 1);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut ledger = Ledger::new();
        let account = ledger.register_account("917590333").unwrap();

        ledger.deposit(account.id, Money::new(1500)).unwrap();
        ledger.deposit(account.id, Money::new(5)).unwrap();

        let balance = ledger.find_account_by_id(account.id).unwrap().balance;
        assert_eq!(balance, Money::new(1505));
    }

    #[test]
    fn test_deposit_non_positive_is_rejected() {
        let mut ledger = Ledger::new();
        let account = ledger.register_account("917590333").unwrap();
        ledger.deposit(account.id, Money::new(100)).unwrap();

        for amount in [0, -1, -100] {
            let err = ledger.deposit(account.id, Money::new(amount)).unwrap_err();
            assert!(matches!(err, WalletError::AmountMustBePositive(_)));
        }
        assert_eq!(
            ledger.find_account_by_id(account.id).unwrap().balance,
            Money::new(100)
        );
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let mut ledger = Ledger::new();
        let account = ledger.register_account("917590333").unwrap();
        ledger.deposit(account.id, Money::new(i64::MAX)).unwrap();

        let err = ledger.deposit(account.id, Money::new(1)).unwrap_err();

        assert!(matches!(err, WalletError::AmountOverflow { .. }));
        assert_eq!(
            ledger.find_account_by_id(account.id).unwrap().balance,
            Money::new(i64::MAX)
        );
    }

    #[test]
    fn test_register_rejects_separator_in_phone() {
        let mut ledger = Ledger::new();
        for phone in ["917;590", "917|590", "917\n590"] {
            let err = ledger.register_account(phone).unwrap_err();
            assert!(matches!(err, WalletError::InvalidField { field: "phone", .. }));
        }
        assert!(ledger.accounts().is_empty());
    }

    #[test]
    fn test_deposit_unknown_account() {
        let mut ledger = Ledger::new();
        let err = ledger.deposit(AccountId::new(5), Money::new(10)).unwrap_err();
        assert!(err.is_not_found_for(Entity::Account));
    }

    #[test]
    fn test_overwrite_rejects_phone_of_other_account() {
        let mut ledger = Ledger::new();
        let a = ledger.register_account("111").unwrap();
        ledger.register_account("222").unwrap();

        assert!(ledger.overwrite_account(a.id, "222", Money::new(5)).is_err());
        ledger.overwrite_account(a.id, "333", Money::new(5)).unwrap();

        let updated = ledger.find_account_by_id(a.id).unwrap();
        assert_eq!(updated.phone, "333");
        assert_eq!(updated.balance, Money::new(5));
    }

    #[test]
    fn test_register_with_zero_balance() {
        let mut ledger = Ledger::new();
        let account = ledger.register_with_balance("111", Money::zero()).unwrap();
        assert_eq!(account.balance, Money::zero());

        let funded = ledger.register_with_balance("222", Money::new(40)).unwrap();
        assert_eq!(funded.balance, Money::new(40));
    }

    #[test]
    fn test_resync_counter_never_moves_backwards() {
        let mut ledger = Ledger::new();
        ledger.register_account("111").unwrap();
        ledger.register_account("222").unwrap();
        ledger.resync_account_counter();

        let next = ledger.register_account("333").unwrap();
        assert_eq!(next.id, AccountId::new(3));
    }

    #[test]
    fn test_resync_counter_catches_up_with_higher_ids() {
        let mut ledger = Ledger::new();
        ledger.register_account("111").unwrap();
        ledger.accounts[0].id = AccountId::new(7);

        ledger.resync_account_counter();

        let next = ledger.register_account("222").unwrap();
        assert_eq!(next.id, AccountId::new(8));
    }
}
