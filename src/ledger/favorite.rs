//! Favorite operations

use super::{check_text_field, Ledger};
use crate::error::{WalletError, WalletResult};
use crate::models::{Favorite, FavoriteId, Payment, PaymentId};

impl Ledger {
    /// Save a payment's account, amount and category under `name`
    pub fn favorite_payment(&mut self, payment_id: &PaymentId, name: &str) -> WalletResult<Favorite> {
        if name.is_empty() {
            return Err(WalletError::EmptyFavoriteName);
        }
        check_text_field("name", name)?;

        let payment = self.find_payment_by_id(payment_id)?;
        let favorite = Favorite::from_payment(payment, name);
        self.favorites.push(favorite.clone());
        Ok(favorite)
    }

    /// Make a new payment from a favorite's stored details
    ///
    /// Subject to the same checks as [`Ledger::pay`].
    pub fn pay_from_favorite(&mut self, favorite_id: &FavoriteId) -> WalletResult<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());
        self.pay(account_id, amount, &category)
    }
}
