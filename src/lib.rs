//! wallet-ledger - in-memory personal wallet ledger
//!
//! Tracks accounts identified by phone number, records payments debited
//! from those accounts, lets payments be favorited and replayed, and
//! persists the whole ledger to flat text files.
//!
//! # Architecture
//!
//! - `models`: accounts, payments, favorites and their id/money types
//! - `ledger`: the [`Ledger`] aggregate and every operation on it
//! - `snapshot`: the single-file and directory dump formats
//! - `export`: chunked account history files
//! - `display`: plain-text formatting for terminal output
//! - `config`: paths and settings
//! - `cli`: clap subcommands driving a ledger session
//!
//! # Example
//!
//! ```
//! use wallet_ledger::ledger::Ledger;
//! use wallet_ledger::models::{Money, PaymentStatus};
//!
//! let mut ledger = Ledger::new();
//! let account = ledger.register_account("917590333")?;
//! ledger.deposit(account.id, Money::new(1500))?;
//!
//! let payment = ledger.pay(account.id, Money::new(250), "internet")?;
//! assert_eq!(payment.status, PaymentStatus::InProgress);
//!
//! ledger.reject(&payment.id)?;
//! assert_eq!(ledger.find_account_by_id(account.id)?.balance, Money::new(1500));
//! # Ok::<(), wallet_ledger::WalletError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod snapshot;
pub mod utils;

pub use error::{WalletError, WalletResult};
pub use ledger::Ledger;
