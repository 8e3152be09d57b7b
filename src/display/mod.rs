//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for accounts, payments and favorites.

pub mod account;
pub mod payment;

pub use account::{format_account_details, format_account_list, format_wallet_tree};
pub use payment::{
    format_favorite_list, format_payment_details, format_payment_list, format_progress,
};
