//! Currency records and the read-only currency catalog
//!
//! A [`Currency`] describes one monetary unit: ISO 4217 code, display symbol,
//! human-readable name, and the canonical number of minor-unit digits.
//! Equality is structural over all four fields, never by code alone.
//!
//! The [`CurrencyCatalog`] is populated once from a fixed builtin table and is
//! never mutated afterwards; concurrent lookups need no locking.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// An immutable description of one monetary unit
///
/// Two `Currency` values are equal iff all fields are equal. A record that
/// shares a code with a catalog entry but differs in symbol, name, or
/// precision is a different currency for every comparison in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    code: Cow<'static, str>,
    symbol: Cow<'static, str>,
    name: Cow<'static, str>,
    decimal_digits: u32,
}

impl Currency {
    /// Creates a catalog entry from static data
    const fn builtin(
        code: &'static str,
        symbol: &'static str,
        name: &'static str,
        decimal_digits: u32,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            symbol: Cow::Borrowed(symbol),
            name: Cow::Borrowed(name),
            decimal_digits,
        }
    }

    /// Creates a currency record from owned data
    ///
    /// Intended for catalogs assembled at runtime, e.g. fakes in tests. The
    /// builtin catalog entries are preferred wherever they apply.
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimal_digits: u32,
    ) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            symbol: Cow::Owned(symbol.into()),
            name: Cow::Owned(name.into()),
            decimal_digits,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical number of minor-unit digits
    ///
    /// Informational: arithmetic never rounds to this automatically.
    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Builtin ISO 4217 currency data
///
/// Zero-digit (JPY, KRW) and three-digit (BHD, KWD, TND) currencies included
/// so minor-unit handling is exercised across the full precision range.
static BUILTIN_CURRENCIES: &[Currency] = &[
    Currency::builtin("USD", "$", "US Dollar", 2),
    Currency::builtin("EUR", "\u{20ac}", "Euro", 2),
    Currency::builtin("GBP", "\u{a3}", "British Pound", 2),
    Currency::builtin("JPY", "\u{a5}", "Japanese Yen", 0),
    Currency::builtin("CHF", "CHF", "Swiss Franc", 2),
    Currency::builtin("CAD", "C$", "Canadian Dollar", 2),
    Currency::builtin("AUD", "A$", "Australian Dollar", 2),
    Currency::builtin("NZD", "NZ$", "New Zealand Dollar", 2),
    Currency::builtin("CNY", "\u{a5}", "Chinese Yuan", 2),
    Currency::builtin("HKD", "HK$", "Hong Kong Dollar", 2),
    Currency::builtin("SGD", "S$", "Singapore Dollar", 2),
    Currency::builtin("INR", "\u{20b9}", "Indian Rupee", 2),
    Currency::builtin("KRW", "\u{20a9}", "South Korean Won", 0),
    Currency::builtin("SEK", "kr", "Swedish Krona", 2),
    Currency::builtin("NOK", "kr", "Norwegian Krone", 2),
    Currency::builtin("DKK", "kr", "Danish Krone", 2),
    Currency::builtin("PLN", "z\u{142}", "Polish Zloty", 2),
    Currency::builtin("CZK", "K\u{10d}", "Czech Koruna", 2),
    Currency::builtin("TRY", "\u{20ba}", "Turkish Lira", 2),
    Currency::builtin("RUB", "\u{20bd}", "Russian Ruble", 2),
    Currency::builtin("BRL", "R$", "Brazilian Real", 2),
    Currency::builtin("MXN", "$", "Mexican Peso", 2),
    Currency::builtin("ZAR", "R", "South African Rand", 2),
    Currency::builtin("NGN", "\u{20a6}", "Nigerian Naira", 2),
    Currency::builtin("KES", "KSh", "Kenyan Shilling", 2),
    Currency::builtin("TZS", "TSh", "Tanzanian Shilling", 2),
    Currency::builtin("AED", "\u{62f}.\u{625}", "UAE Dirham", 2),
    Currency::builtin("SAR", "\u{fdfc}", "Saudi Riyal", 2),
    Currency::builtin("BHD", ".\u{62f}.\u{628}", "Bahraini Dinar", 3),
    Currency::builtin("KWD", "\u{62f}.\u{643}", "Kuwaiti Dinar", 3),
    Currency::builtin("TND", "\u{62f}.\u{62a}", "Tunisian Dinar", 3),
];

static BUILTIN_CATALOG: Lazy<CurrencyCatalog> =
    Lazy::new(|| CurrencyCatalog::from_currencies(BUILTIN_CURRENCIES.iter().cloned()));

/// A read-only registry of known currencies, keyed by code
///
/// The builtin catalog is initialized once, before first use, and exposes no
/// mutation API; arbitrary threads may resolve codes concurrently. Callers
/// that need isolation (tests, restricted currency sets) build their own
/// catalog with [`CurrencyCatalog::from_currencies`] and pass it explicitly.
#[derive(Debug, Clone)]
pub struct CurrencyCatalog {
    by_code: HashMap<String, Currency>,
}

impl CurrencyCatalog {
    /// Builds a catalog from the given currency records
    ///
    /// Later records win on duplicate codes.
    pub fn from_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let by_code = currencies
            .into_iter()
            .map(|currency| (currency.code().to_owned(), currency))
            .collect();
        Self { by_code }
    }

    /// Returns the process-wide builtin catalog
    pub fn builtin() -> &'static CurrencyCatalog {
        &BUILTIN_CATALOG
    }

    /// Resolves a currency code, failing with [`MoneyError::UnknownCurrency`]
    ///
    /// The code is trimmed and uppercased before lookup, since stored
    /// documents are not guaranteed to carry canonical casing.
    pub fn resolve(&self, code: &str) -> Result<&Currency, MoneyError> {
        self.get(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.trim().to_ascii_uppercase()))
    }

    /// Looks up a currency code, returning `None` when unknown
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.by_code.get(&code.trim().to_ascii_uppercase())
    }

    /// Returns true if the code resolves in this catalog
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates over all currency records
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.by_code.values()
    }

    /// Returns the number of registered currencies
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if the catalog holds no currencies
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_resolves_usd() {
        let usd = CurrencyCatalog::builtin().resolve("USD").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.symbol(), "$");
        assert_eq!(usd.decimal_digits(), 2);
    }

    #[test]
    fn test_resolve_normalizes_case_and_whitespace() {
        let catalog = CurrencyCatalog::builtin();
        assert_eq!(catalog.resolve(" usd ").unwrap().code(), "USD");
        assert_eq!(catalog.resolve("eur").unwrap().code(), "EUR");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let result = CurrencyCatalog::builtin().resolve("XXX");
        assert_eq!(result, Err(MoneyError::UnknownCurrency("XXX".to_string())));
    }

    #[test]
    fn test_structural_equality_not_code_equality() {
        let catalog_usd = CurrencyCatalog::builtin().resolve("USD").unwrap().clone();
        let other_usd = Currency::new("USD", "US$", "US Dollar", 2);
        assert_ne!(catalog_usd, other_usd);
    }

    #[test]
    fn test_custom_catalog_is_isolated() {
        let catalog = CurrencyCatalog::from_currencies([Currency::new("WIR", "W", "Wir Franc", 2)]);
        assert!(catalog.contains("WIR"));
        assert!(!catalog.contains("USD"));
        assert_eq!(catalog.len(), 1);
    }
}
