//! Per-entity text records
//!
//! Every entity is written as semicolon-separated fields:
//!
//! | entity   | fields                                   |
//! |----------|------------------------------------------|
//! | Account  | `id;phone;balance`                       |
//! | Payment  | `id;accountId;amount;category;status`    |
//! | Favorite | `id;accountId;name;amount;category`      |
//!
//! Decoding checks the field count and every numeric field; any problem is a
//! [`WalletError::MalformedDumpRecord`] naming `location`.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{WalletError, WalletResult};
use crate::models::{Account, AccountId, Favorite, FavoriteId, Money, Payment, PaymentId};

pub const FIELD_SEPARATOR: char = ';';

/// An entity with a one-line text representation
pub trait DumpRecord: Sized {
    /// Number of fields in the encoded form
    const FIELDS: usize;

    /// Encode without any trailing separator
    fn to_record(&self) -> String;

    /// Decode from already-split fields (exactly [`Self::FIELDS`] of them)
    fn from_fields(fields: &[&str], location: &dyn Display) -> WalletResult<Self>;

    /// Split `record` and decode it
    fn parse_record(record: &str, location: &dyn Display) -> WalletResult<Self> {
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        if fields.len() != Self::FIELDS {
            return Err(WalletError::malformed(
                location,
                format!("expected {} fields, found {}", Self::FIELDS, fields.len()),
            ));
        }
        Self::from_fields(&fields, location)
    }
}

fn parse_field<T: FromStr>(value: &str, name: &str, location: &dyn Display) -> WalletResult<T> {
    value
        .parse()
        .map_err(|_| WalletError::malformed(location, format!("invalid {} '{}'", name, value)))
}

fn parse_non_negative(value: &str, name: &str, location: &dyn Display) -> WalletResult<Money> {
    let amount: Money = parse_field(value, name, location)?;
    if amount.is_negative() {
        return Err(WalletError::malformed(
            location,
            format!("{} cannot be negative: {}", name, amount),
        ));
    }
    Ok(amount)
}

impl DumpRecord for Account {
    const FIELDS: usize = 3;

    fn to_record(&self) -> String {
        format!("{};{};{}", self.id, self.phone, self.balance)
    }

    fn from_fields(fields: &[&str], location: &dyn Display) -> WalletResult<Self> {
        Ok(Self {
            id: parse_field::<AccountId>(fields[0], "account id", location)?,
            phone: fields[1].to_string(),
            balance: parse_non_negative(fields[2], "balance", location)?,
        })
    }
}

impl DumpRecord for Payment {
    const FIELDS: usize = 5;

    fn to_record(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.id,
            self.account_id,
            self.amount,
            self.category,
            self.status.as_dump_str()
        )
    }

    fn from_fields(fields: &[&str], location: &dyn Display) -> WalletResult<Self> {
        Ok(Self {
            id: PaymentId::from_raw(fields[0]),
            account_id: parse_field(fields[1], "account id", location)?,
            amount: parse_non_negative(fields[2], "amount", location)?,
            category: fields[3].to_string(),
            status: fields[4]
                .parse()
                .map_err(|reason: String| WalletError::malformed(location, reason))?,
        })
    }
}

impl DumpRecord for Favorite {
    const FIELDS: usize = 5;

    fn to_record(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.id, self.account_id, self.name, self.amount, self.category
        )
    }

    fn from_fields(fields: &[&str], location: &dyn Display) -> WalletResult<Self> {
        if fields[2].is_empty() {
            return Err(WalletError::malformed(location, "favorite name is empty"));
        }
        Ok(Self {
            id: FavoriteId::from_raw(fields[0]),
            account_id: parse_field(fields[1], "account id", location)?,
            name: fields[2].to_string(),
            amount: parse_non_negative(fields[3], "amount", location)?,
            category: fields[4].to_string(),
        })
    }
}
