//! Snapshot codec
//!
//! Two text formats coexist:
//!
//! - `single_file`: accounts only, `id;phone;balance|` records in one file
//! - `directory`: `accounts.dump`, `payments.dump` and `favorites.dump`,
//!   one record per line
//!
//! Both decode paths reconcile against the live ledger: records with a known
//! id update it in place, unknown ones are inserted.

pub mod directory;
pub mod file_io;
pub mod reconcile;
pub mod record;
pub mod single_file;

pub use directory::{ACCOUNTS_FILE, FAVORITES_FILE, PAYMENTS_FILE};
pub use reconcile::ImportSummary;
pub use record::DumpRecord;
