//! Casting between Money values and their raw stored representation
//!
//! A document store has no native Money type; it persists the triple
//! `{amount, currency, createdAt}`. This module provides the cast-in path
//! (raw record -> [`Money`], resolving the currency code through an injected
//! [`CurrencyCatalog`]) and the cast-out path ([`Money`] -> raw record).
//!
//! The stored amount is an `f64`. Conversion in both directions goes through
//! `rust_decimal`'s shortest-roundtrip float handling, so amounts survive the
//! round trip exactly up to roughly 15 significant digits; beyond that the
//! stored value loses precision. That boundary is part of the storage
//! contract, not something this layer papers over.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use money_core::{CurrencyCatalog, Money, MoneyError};

/// An amount as it may appear in a stored document
///
/// Stores hold either a native number or a numeric string; both parse into
/// the exact decimal representation on cast-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Converts to the exact decimal representation
    pub fn to_decimal(&self) -> Result<Decimal, MoneyError> {
        match self {
            RawAmount::Number(value) => Decimal::from_f64(*value)
                .ok_or_else(|| MoneyError::InvalidAmount(value.to_string())),
            RawAmount::Text(text) => Decimal::from_str(text.trim())
                .map_err(|_| MoneyError::InvalidAmount(text.clone())),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_owned())
    }
}

/// The persisted shape of a Money value
///
/// Serializes as `{"amount": 1.234, "currency": "USD", "createdAt": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    pub amount: f64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Money> for RawMoney {
    /// Cast-out: best-effort numeric conversion of the exact amount
    fn from(money: &Money) -> Self {
        // Decimal's full value range fits in f64; only sub-precision digits
        // can be lost, per the module-level storage contract.
        let amount = money.amount().to_f64().unwrap_or_default();
        Self {
            amount,
            currency: money.currency().code().to_owned(),
            created_at: money.created_at(),
        }
    }
}

/// Translates raw stored records into Money values and back
///
/// The currency catalog is an explicit dependency rather than a hidden
/// global, so callers can run against restricted or fake catalogs.
#[derive(Debug, Clone)]
pub struct MoneyCodec<'a> {
    catalog: &'a CurrencyCatalog,
}

impl MoneyCodec<'static> {
    /// Creates a codec over the process-wide builtin catalog
    pub fn with_builtin_catalog() -> Self {
        Self {
            catalog: CurrencyCatalog::builtin(),
        }
    }
}

impl<'a> MoneyCodec<'a> {
    /// Creates a codec over the given catalog
    pub fn new(catalog: &'a CurrencyCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this codec resolves currency codes against
    pub fn catalog(&self) -> &CurrencyCatalog {
        self.catalog
    }

    /// Cast-in: reconstructs a Money value from its persisted record
    ///
    /// Fails with [`MoneyError::UnknownCurrency`] when the stored code does
    /// not resolve; construction never defaults to an arbitrary currency.
    pub fn cast_in(&self, raw: &RawMoney) -> Result<Money, MoneyError> {
        self.cast_raw(
            &RawAmount::Number(raw.amount),
            &raw.currency,
            Some(raw.created_at),
        )
    }

    /// Cast-in from a loose raw triple
    ///
    /// Accepts a number-or-string amount and an optional timestamp; a missing
    /// timestamp stamps the reconstructed value with the current time.
    pub fn cast_raw(
        &self,
        amount: &RawAmount,
        currency_code: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Money, MoneyError> {
        let amount = amount.to_decimal().inspect_err(|error| {
            debug!(%error, "rejected stored amount");
        })?;
        let currency = self
            .catalog
            .resolve(currency_code)
            .inspect_err(|error| {
                debug!(%error, "rejected stored currency code");
            })?
            .clone();
        Ok(match created_at {
            Some(created_at) => Money::with_timestamp(amount, currency, created_at),
            None => Money::new(amount, currency),
        })
    }

    /// Cast-out: produces the persisted record for a Money value
    pub fn cast_out(&self, money: &Money) -> RawMoney {
        RawMoney::from(money)
    }
}
