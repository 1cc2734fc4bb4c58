//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random money test data that
//! maintains domain invariants. Amount strategies stay inside the range that
//! round-trips exactly through the stored f64 representation.

use money_core::{Currency, CurrencyCatalog, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating builtin Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    let codes: Vec<&'static str> = vec!["USD", "EUR", "GBP", "JPY", "CHF", "KES", "TZS", "BHD"];
    proptest::sample::select(codes).prop_map(|code| {
        CurrencyCatalog::builtin()
            .resolve(code)
            .expect("builtin code")
            .clone()
    })
}

/// Strategy for generating amounts, scale 0 to 4 decimal places
///
/// Mantissas are bounded so `mantissa * 10^scale` stays far below 2^53 and
/// the f64 storage round trip is lossless.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..5u32).prop_map(|(mantissa, scale)| {
        Decimal::new(mantissa, scale)
    })
}

/// Strategy for generating strictly positive amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..5u32).prop_map(|(mantissa, scale)| {
        Decimal::new(mantissa, scale)
    })
}

/// Strategy for generating Money values across builtin currencies
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::new(amount, currency))
}

/// Strategy for generating USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    amount_strategy().prop_map(|amount| {
        Money::new(
            amount,
            CurrencyCatalog::builtin()
                .resolve("USD")
                .expect("builtin code")
                .clone(),
        )
    })
}
