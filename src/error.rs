//! Custom error types for the wallet ledger
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

use crate::models::{AccountId, Money};

/// Entity kinds that can be looked up in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Account,
    Payment,
    Favorite,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "Account"),
            Self::Payment => write!(f, "Payment"),
            Self::Favorite => write!(f, "Favorite"),
        }
    }
}

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Another account already owns this phone
    #[error("Phone already registered: {0}")]
    PhoneAlreadyRegistered(String),

    /// Deposits and payments need a strictly positive amount
    #[error("Amount must be greater than 0, got {0}")]
    AmountMustBePositive(Money),

    /// Entity not found errors
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: Entity, identifier: String },

    /// The account cannot cover a payment
    #[error("Insufficient balance on account {account}: need {needed}, have {available}")]
    InsufficientBalance {
        account: AccountId,
        needed: Money,
        available: Money,
    },

    /// Crediting the account would exceed the largest representable balance
    #[error("Amount overflow on account {account}: {balance} + {amount}")]
    AmountOverflow {
        account: AccountId,
        balance: Money,
        amount: Money,
    },

    /// A text field holds a character reserved by the dump formats
    #[error("Invalid {field} {value:?}: must not contain ';', '|' or line breaks")]
    InvalidField { field: &'static str, value: String },

    /// Favorites must be named
    #[error("Favorite name cannot be empty")]
    EmptyFavoriteName,

    /// A dump line had the wrong shape or an unparsable field
    #[error("Malformed dump record at {location}: {reason}")]
    MalformedDumpRecord { location: String, reason: String },

    /// Chunked operations need at least one record per chunk
    #[error("Chunk size must be greater than 0")]
    InvalidChunkSize,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl WalletError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: Entity::Account,
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for payments
    pub fn payment_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: Entity::Payment,
            identifier: identifier.to_string(),
        }
    }

    /// Create a "not found" error for favorites
    pub fn favorite_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: Entity::Favorite,
            identifier: identifier.to_string(),
        }
    }

    /// Create a malformed-record error pointing at `location`
    pub fn malformed(location: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::MalformedDumpRecord {
            location: location.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error of any kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "not found" error for the given entity kind
    pub fn is_not_found_for(&self, kind: Entity) -> bool {
        matches!(self, Self::NotFound { entity, .. } if *entity == kind)
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
