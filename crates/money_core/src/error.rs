//! Error types for monetary operations

use thiserror::Error;

/// Errors that can occur during money construction and operations
///
/// The legacy comparison and arithmetic shims (`is_less_than`, `plus`, ...)
/// never produce these: cross-currency mismatches there are defined silent
/// fallbacks, not failures. Only the `checked_*` operations report
/// [`MoneyError::CurrencyMismatch`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}
