//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields and take defaults for
//! everything else.

use chrono::{DateTime, TimeZone, Utc};
use money_core::{Currency, CurrencyCatalog, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Returns the builtin catalog's record for a code, panicking on typos
///
/// Test-only convenience; production code resolves through an injected
/// catalog and handles the error.
pub fn builtin_currency(code: &str) -> Currency {
    CurrencyCatalog::builtin()
        .resolve(code)
        .unwrap_or_else(|_| panic!("{code} is not a builtin currency"))
        .clone()
}

/// A fixed timestamp for tests that compare records
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Builder for Money test values
pub struct MoneyBuilder {
    amount: Decimal,
    currency: Currency,
    created_at: Option<DateTime<Utc>>,
}

impl Default for MoneyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoneyBuilder {
    /// Creates a builder with default values (100.00 USD, current time)
    pub fn new() -> Self {
        Self {
            amount: dec!(100.00),
            currency: builtin_currency("USD"),
            created_at: None,
        }
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the currency from a builtin code
    pub fn with_currency_code(mut self, code: &str) -> Self {
        self.currency = builtin_currency(code);
        self
    }

    /// Sets an explicit creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the Money value
    pub fn build(self) -> Money {
        match self.created_at {
            Some(created_at) => Money::with_timestamp(self.amount, self.currency, created_at),
            None => Money::new(self.amount, self.currency),
        }
    }
}
