//! Export module
//!
//! Writes a single account's payment history as size-bounded chunk files.
//! Whole-ledger snapshots live in `snapshot`.

pub mod history;

pub use history::{chunk_file_name, export_account_history, history_to_file};
