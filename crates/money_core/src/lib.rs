//! Money Core - immutable monetary values with exact decimal arithmetic
//!
//! This crate provides the value types shared by everything that handles
//! monetary amounts:
//! - A `Money` value pairing an exact decimal amount with a currency and a
//!   creation timestamp
//! - A read-only `CurrencyCatalog` of known ISO currencies
//! - Typed errors for parsing, unknown currencies, and division by zero
//!
//! Amounts are `rust_decimal::Decimal` throughout; binary floating point is
//! never used internally, so repeated arithmetic cannot accumulate rounding
//! drift.

pub mod currency;
pub mod error;
pub mod money;

pub use currency::{Currency, CurrencyCatalog};
pub use error::MoneyError;
pub use money::Money;
