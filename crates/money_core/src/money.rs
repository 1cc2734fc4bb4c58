//! The Money value type
//!
//! A [`Money`] pairs an exact base-10 [`Decimal`] amount with a [`Currency`]
//! captured by value, plus a creation timestamp carried as metadata. Every
//! operation returns a new value; nothing is ever mutated in place.
//!
//! # Cross-currency policy
//!
//! Operations across differing currencies come in two tiers:
//!
//! - `checked_add` / `checked_sub` / `checked_cmp` report
//!   [`MoneyError::CurrencyMismatch`] and are the recommended surface.
//! - The legacy shims `plus` / `minus` / `is_less_than` / `is_greater_than`
//!   (and the `PartialOrd` operators) keep the historical contract: a
//!   cross-currency sum or difference is a silent no-op returning the left
//!   operand, and a cross-currency comparison is `false`. Callers relying on
//!   these must know that the arithmetic is a no-op across currencies.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;
use crate::error::MoneyError;

/// An immutable monetary amount with associated currency
///
/// Equality compares the amount numerically (scale-insensitive) and the
/// currency structurally; the creation timestamp is informational metadata
/// and never participates in comparison or arithmetic.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    created_at: DateTime<Utc>,
}

impl Money {
    /// Creates a new Money value stamped with the current time
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self::with_timestamp(amount, currency, Utc::now())
    }

    /// Creates a new Money value with an explicit creation timestamp
    pub fn with_timestamp(amount: Decimal, currency: Currency, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            currency,
            created_at,
        }
    }

    /// Parses a decimal-formatted string into a Money value
    ///
    /// Fails with [`MoneyError::InvalidAmount`] on malformed input; binary
    /// floats never enter the amount representation.
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Creates Money from an integer amount in the currency's minor units
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let amount = Decimal::new(minor_units, currency.decimal_digits());
        Self::new(amount, currency)
    }

    /// Creates a zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the exact decimal amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is not positive
    ///
    /// Defined as the complement of [`Money::is_positive`], so a zero amount
    /// classifies as negative. Historical contract; callers depend on this
    /// exact boundary.
    pub fn is_negative(&self) -> bool {
        !self.is_positive()
    }

    /// Returns true if both values carry structurally equal currencies
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Compares amounts, failing on currency mismatch
    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        if !self.same_currency(other) {
            return Err(self.mismatch(other));
        }
        Ok(self.amount.cmp(&other.amount))
    }

    /// Legacy less-than: `false` when the currencies differ
    pub fn is_less_than(&self, other: &Money) -> bool {
        self.checked_cmp(other) == Ok(Ordering::Less)
    }

    /// Legacy greater-than: `false` when the currencies differ
    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.checked_cmp(other) == Ok(Ordering::Greater)
    }

    /// Checked addition that fails on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.same_currency(other) {
            return Err(self.mismatch(other));
        }
        Ok(Self::new(self.amount + other.amount, self.currency.clone()))
    }

    /// Checked subtraction that fails on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.same_currency(other) {
            return Err(self.mismatch(other));
        }
        Ok(Self::new(self.amount - other.amount, self.currency.clone()))
    }

    /// Legacy addition: a cross-currency sum is a silent no-op
    ///
    /// Returns a copy of `self` unchanged when the currencies differ.
    pub fn plus(&self, other: &Money) -> Money {
        self.checked_add(other)
            .unwrap_or_else(|_| Self::new(self.amount, self.currency.clone()))
    }

    /// Legacy subtraction: a cross-currency difference is a silent no-op
    ///
    /// Returns a copy of `self` unchanged when the currencies differ.
    pub fn minus(&self, other: &Money) -> Money {
        self.checked_sub(other)
            .unwrap_or_else(|_| Self::new(self.amount, self.currency.clone()))
    }

    /// Multiplies the amount by a scalar, preserving the currency
    pub fn multiply(&self, factor: Decimal) -> Money {
        Self::new(self.amount * factor, self.currency.clone())
    }

    /// Divides the amount by a scalar, preserving the currency
    ///
    /// Fails with [`MoneyError::DivisionByZero`] instead of producing an
    /// infinite amount.
    pub fn divide(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency.clone()))
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Money {
        Self::new(self.amount.abs(), self.currency.clone())
    }

    /// Rounds to exactly `places` decimal places, half away from zero
    ///
    /// The result keeps a scale of exactly `places`, so whole amounts gain
    /// trailing zeros: 948 at two places displays as `948.00`.
    pub fn to_fixed_places(&self, places: u32) -> Money {
        let mut amount = self
            .amount
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(places);
        Self::new(amount, self.currency.clone())
    }

    /// Rounds to `digits` significant digits, half away from zero
    ///
    /// Trailing zeros are kept up to the significant-digit count, matching
    /// fixed-notation precision formatting. `digits == 0` and zero amounts
    /// are returned unchanged.
    pub fn to_significant_digits(&self, digits: u32) -> Money {
        if digits == 0 || self.amount.is_zero() {
            return Self::new(self.amount, self.currency.clone());
        }

        let abs = self.amount.abs();
        let amount = if abs >= Decimal::ONE {
            let integer_digits = abs.trunc().to_string().len() as u32;
            if digits >= integer_digits {
                let mut rounded = self.amount.round_dp_with_strategy(
                    digits - integer_digits,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                rounded.rescale(digits - integer_digits);
                rounded
            } else {
                // Rounding lands inside the integer part: 9876 at 2 -> 9900.
                let scale = pow10(integer_digits - digits);
                (self.amount / scale)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    * scale
            }
        } else {
            // Leading zeros between the decimal point and the first
            // significant digit extend the target scale: 0.00123 at 2 -> 0.0012.
            let mut leading = 0u32;
            let mut scaled = abs;
            while scaled < Decimal::ONE {
                scaled *= Decimal::TEN;
                leading += 1;
            }
            let places = leading - 1 + digits;
            let mut rounded = self
                .amount
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(places);
            rounded
        };
        Self::new(amount, self.currency.clone())
    }

    fn mismatch(&self, other: &Money) -> MoneyError {
        MoneyError::CurrencyMismatch(
            self.currency.code().to_string(),
            other.currency.code().to_string(),
        )
    }
}

fn pow10(exponent: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(exponent), 0)
}

impl PartialEq for Money {
    /// Amounts numerically equal and currencies structurally equal;
    /// `created_at` is ignored
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    /// Money of differing currencies is unordered: `partial_cmp` returns
    /// `None`, so `<`, `<=`, `>`, and `>=` all evaluate to `false` across
    /// currencies (the legacy comparison policy)
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(other).ok()
    }
}

impl fmt::Display for Money {
    /// Renders `"<code> <amount>"` with the decimal's canonical string form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor).expect("Division by zero in Money::div")
    }
}
