//! Configuration module for the wallet CLI
//!
//! - Path resolution for the dump directory, history output and settings
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::Settings;
