//! Core data models for the wallet
//!
//! Accounts, payments and favorites, plus the id and money newtypes they
//! are built from. These are plain data; the rules live in `ledger`.

pub mod account;
pub mod favorite;
pub mod ids;
pub mod money;
pub mod payment;

pub use account::Account;
pub use favorite::Favorite;
pub use ids::{AccountId, FavoriteId, PaymentId, FAVORITE_PREFIX};
pub use money::{Money, MoneyParseError};
pub use payment::{Payment, PaymentStatus};
