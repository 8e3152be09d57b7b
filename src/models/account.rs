//! Account model
//!
//! A phone-identified balance holder.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A wallet account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier assigned at registration
    pub id: AccountId,

    /// Phone number; unique across the ledger
    pub phone: String,

    /// Current balance, never negative
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, phone: impl Into<String>) -> Self {
        Self {
            id,
            phone: phone.into(),
            balance: Money::zero(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} (balance {})", self.id, self.phone, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new(AccountId::new(1), "917590333");
        assert_eq!(account.phone, "917590333");
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_display() {
        let mut account = Account::new(AccountId::new(3), "917590330");
        account.balance = Money::new(1500);
        assert_eq!(account.to_string(), "#3 917590330 (balance 1500)");
    }
}
