//! Favorite model
//!
//! A named template for replaying a payment's account, amount and category.

use serde::{Deserialize, Serialize};

use super::ids::{AccountId, FavoriteId};
use super::money::Money;
use super::payment::Payment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,

    /// Caller-chosen label, never empty
    pub name: String,

    pub amount: Money,
    pub category: String,
}

impl Favorite {
    /// Capture a payment as a favorite under `name`
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Self {
            id: FavoriteId::generate(),
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}
