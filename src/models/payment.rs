//! Payment model
//!
//! A recorded debit against an account, with a lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{AccountId, PaymentId};
use super::money::Money;

/// Status of a payment
///
/// A payment starts `InProgress` and can be moved to `Failed` once, by a
/// reject. It never moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    InProgress,
    Failed,
}

impl PaymentStatus {
    /// Text used for this status inside dump files
    pub fn as_dump_str(&self) -> &'static str {
        match self {
            Self::InProgress => "INPROGRESS",
            Self::Failed => "FAIL",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INPROGRESS" => Ok(Self::InProgress),
            "FAIL" => Ok(Self::Failed),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

/// A payment debited from an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,

    /// Account the payment was debited from
    pub account_id: AccountId,

    pub amount: Money,

    /// Free-form category tag (e.g. "internet")
    pub category: String,

    pub status: PaymentStatus,
}

impl Payment {
    /// Create a new in-progress payment with a fresh id
    pub fn new(account_id: AccountId, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: PaymentId::generate(),
            account_id,
            amount,
            category: category.into(),
            status: PaymentStatus::InProgress,
        }
    }

    /// Copy every field except the id, which is freshly generated
    pub fn duplicate(&self) -> Self {
        Self {
            id: PaymentId::generate(),
            ..self.clone()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_is_in_progress() {
        let payment = Payment::new(AccountId::new(1), Money::new(250), "internet");
        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert!(!payment.is_failed());
    }

    #[test]
    fn test_duplicate_changes_only_id() {
        let mut original = Payment::new(AccountId::new(1), Money::new(250), "internet");
        original.status = PaymentStatus::Failed;

        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.account_id, original.account_id);
        assert_eq!(copy.amount, original.amount);
        assert_eq!(copy.category, original.category);
        assert_eq!(copy.status, PaymentStatus::Failed);
    }

    #[test]
    fn test_status_dump_text() {
        assert_eq!(PaymentStatus::InProgress.as_dump_str(), "INPROGRESS");
        assert_eq!("FAIL".parse::<PaymentStatus>(), Ok(PaymentStatus::Failed));
        assert!("OK".parse::<PaymentStatus>().is_err());
    }
}
