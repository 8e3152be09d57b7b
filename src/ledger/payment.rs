//! Payment operations
//!
//! Paying debits the account immediately. Rejecting credits the payment's
//! amount back and marks it failed; the amount itself is kept on the record.

use tracing::debug;

use super::{check_text_field, Ledger};
use crate::error::{WalletError, WalletResult};
use crate::models::{AccountId, Money, Payment, PaymentId, PaymentStatus};

impl Ledger {
    /// Debit `amount` from an account and record an in-progress payment
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> WalletResult<Payment> {
        if !amount.is_positive() {
            return Err(WalletError::AmountMustBePositive(amount));
        }
        check_text_field("category", category)?;

        let account = self.account_mut(account_id)?;
        if account.balance < amount {
            return Err(WalletError::InsufficientBalance {
                account: account_id,
                needed: amount,
                available: account.balance,
            });
        }
        account.balance -= amount;

        let payment = Payment::new(account_id, amount, category);
        self.payments.push(payment.clone());
        Ok(payment)
    }

    /// Mark a payment failed and refund its amount to the account
    ///
    /// Rejecting a payment that already failed does nothing, so the refund
    /// is applied at most once.
    pub fn reject(&mut self, payment_id: &PaymentId) -> WalletResult<()> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, status) = (payment.account_id, payment.amount, payment.status);

        let account = self.account_mut(account_id)?;
        if status == PaymentStatus::Failed {
            debug!(payment = %payment_id, "payment already rejected");
            return Ok(());
        }
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(WalletError::AmountOverflow {
                account: account_id,
                balance: account.balance,
                amount,
            })?;

        self.payment_mut(payment_id)?.status = PaymentStatus::Failed;
        Ok(())
    }

    /// Duplicate a payment record under a fresh id
    ///
    /// The copy keeps account, amount, category and status. It is not a new
    /// transaction: no balance check, no debit, and it is not appended to
    /// the ledger.
    pub fn repeat(&self, payment_id: &PaymentId) -> WalletResult<Payment> {
        Ok(self.find_payment_by_id(payment_id)?.duplicate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Entity;

    fn funded(balance: i64) -> (Ledger, AccountId) {
        let mut ledger = Ledger::new();
        let account = ledger.register_account("917590333").unwrap();
        ledger.deposit(account.id, Money::new(balance)).unwrap();
        (ledger, account.id)
    }

    fn balance(ledger: &Ledger, id: AccountId) -> Money {
        ledger.find_account_by_id(id).unwrap().balance
    }

    #[test]
    fn test_pay_debits_account() {
        let (mut ledger, id) = funded(1500);

        let payment = ledger.pay(id, Money::new(250), "internet").unwrap();

        assert_eq!(balance(&ledger, id), Money::new(1250));
        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert_eq!(payment.amount, Money::new(250));
        assert_eq!(ledger.payments().len(), 1);
    }

    #[test]
    fn test_pay_entire_balance() {
        let (mut ledger, id) = funded(100);
        ledger.pay(id, Money::new(100), "food").unwrap();
        assert_eq!(balance(&ledger, id), Money::zero());
    }

    #[test]
    fn test_pay_insufficient_balance() {
        let (mut ledger, id) = funded(100);

        let err = ledger.pay(id, Money::new(101), "food").unwrap_err();

        assert!(matches!(err, WalletError::InsufficientBalance { .. }));
        assert_eq!(balance(&ledger, id), Money::new(100));
        assert!(ledger.payments().is_empty());
    }

    #[test]
    fn test_pay_non_positive_amount() {
        let (mut ledger, id) = funded(100);
        let err = ledger.pay(id, Money::zero(), "food").unwrap_err();
        assert!(matches!(err, WalletError::AmountMustBePositive(_)));
    }

    #[test]
    fn test_pay_unknown_account() {
        let mut ledger = Ledger::new();
        let err = ledger
            .pay(AccountId::new(1), Money::new(1), "food")
            .unwrap_err();
        assert!(err.is_not_found_for(Entity::Account));
    }

    #[test]
    fn test_reject_refunds_and_fails() {
        let (mut ledger, id) = funded(1500);
        let payment = ledger.pay(id, Money::new(250), "internet").unwrap();

        ledger.reject(&payment.id).unwrap();

        let stored = ledger.find_payment_by_id(&payment.id).unwrap();
        assert_eq!(stored.status, PaymentStatus::Failed);
        assert_eq!(stored.amount, Money::new(250));
        assert_eq!(balance(&ledger, id), Money::new(1500));
    }

    #[test]
    fn test_reject_twice_refunds_once() {
        let (mut ledger, id) = funded(1500);
        let payment = ledger.pay(id, Money::new(250), "internet").unwrap();

        ledger.reject(&payment.id).unwrap();
        ledger.reject(&payment.id).unwrap();

        assert_eq!(balance(&ledger, id), Money::new(1500));
    }

    #[test]
    fn test_reject_overflow_keeps_payment_in_progress() {
        let (mut ledger, id) = funded(100);
        let payment = ledger.pay(id, Money::new(100), "food").unwrap();
        ledger.deposit(id, Money::new(i64::MAX)).unwrap();

        let err = ledger.reject(&payment.id).unwrap_err();

        assert!(matches!(err, WalletError::AmountOverflow { .. }));
        assert_eq!(balance(&ledger, id), Money::new(i64::MAX));
        let stored = ledger.find_payment_by_id(&payment.id).unwrap();
        assert_eq!(stored.status, PaymentStatus::InProgress);
    }

    #[test]
    fn test_pay_rejects_separator_in_category() {
        let (mut ledger, id) = funded(100);

        let err = ledger.pay(id, Money::new(10), "food;drinks").unwrap_err();

        assert!(matches!(err, WalletError::InvalidField { field: "category", .. }));
        assert_eq!(balance(&ledger, id), Money::new(100));
        assert!(ledger.payments().is_empty());
    }

    #[test]
    fn test_reject_unknown_payment() {
        let mut ledger = Ledger::new();
        let err = ledger.reject(&PaymentId::from_raw("nope")).unwrap_err();
        assert!(err.is_not_found_for(Entity::Payment));
    }

    #[test]
    fn test_repeat_copies_without_debit() {
        let (mut ledger, id) = funded(1500);
        let payment = ledger.pay(id, Money::new(250), "internet").unwrap();

        let copy = ledger.repeat(&payment.id).unwrap();

        assert_ne!(copy.id, payment.id);
        assert_eq!(copy.account_id, payment.account_id);
        assert_eq!(copy.amount, payment.amount);
        assert_eq!(copy.category, payment.category);
        assert_eq!(copy.status, payment.status);
        assert_eq!(balance(&ledger, id), Money::new(1250));
        assert_eq!(ledger.payments().len(), 1);
    }

    #[test]
    fn test_repeat_unknown_payment() {
        let ledger = Ledger::new();
        assert!(ledger.repeat(&PaymentId::from_raw("nope")).is_err());
    }

    #[test]
    fn test_pay_reject_repeat_scenario() {
        let (mut ledger, id) = funded(1500);

        let payment = ledger.pay(id, Money::new(250), "internet").unwrap();
        assert_eq!(balance(&ledger, id), Money::new(1250));

        ledger.reject(&payment.id).unwrap();
        assert_eq!(balance(&ledger, id), Money::new(1500));

        let repeated = ledger.repeat(&payment.id).unwrap();
        assert_ne!(repeated.id, payment.id);
        assert_eq!(repeated.amount, Money::new(250));
        // status is copied, not re-validated
        assert_eq!(repeated.status, PaymentStatus::Failed);
    }
}
