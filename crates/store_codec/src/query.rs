//! Decomposing Money comparisons into storage-field predicates
//!
//! The storage layer has no compound Money field: a stored Money is two
//! scalar fields, `<path>.amount` and `<path>.currency`. A comparison against
//! a Money operand therefore decomposes into two conditions combined with
//! logical AND:
//!
//! - the amount field compared with the caller's operator, and
//! - the currency field checked for exact code equality.
//!
//! The rule holds for every supported operator, `$eq` through `$lte`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use money_core::Money;

use crate::codec::RawMoney;

/// Comparison operators supported by the decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOp {
    /// All supported operators
    pub const ALL: [ComparisonOp; 6] = [
        ComparisonOp::Eq,
        ComparisonOp::Ne,
        ComparisonOp::Gt,
        ComparisonOp::Gte,
        ComparisonOp::Lt,
        ComparisonOp::Lte,
    ];

    /// Document-store operator keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "$eq",
            ComparisonOp::Ne => "$ne",
            ComparisonOp::Gt => "$gt",
            ComparisonOp::Gte => "$gte",
            ComparisonOp::Lt => "$lt",
            ComparisonOp::Lte => "$lte",
        }
    }

    /// Applies the operator to two Money values in memory
    ///
    /// Uses the legacy cross-currency semantics: values of differing
    /// currencies are never equal and never ordered, so every operator except
    /// `Ne` evaluates to `false` across currencies.
    pub fn evaluate(&self, left: &Money, right: &Money) -> bool {
        match self {
            ComparisonOp::Eq => left == right,
            ComparisonOp::Ne => left != right,
            ComparisonOp::Gt => left > right,
            ComparisonOp::Gte => left >= right,
            ComparisonOp::Lt => left < right,
            ComparisonOp::Lte => left <= right,
        }
    }
}

/// One storage-field condition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    /// Dotted path of the stored field
    pub path: String,
    pub op: ComparisonOp,
    pub value: Value,
}

impl FieldCondition {
    /// Renders as an operator-keyed document, e.g. `{"$gt": 8888.7905}`
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(self.op.keyword().to_owned(), self.value.clone());
        Value::Object(doc)
    }
}

/// A Money comparison decomposed into storage-field conditions
///
/// Both conditions must hold; rendering combines them in a single filter
/// document, which document stores interpret as logical AND.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyPredicate {
    pub amount: FieldCondition,
    pub currency: FieldCondition,
}

impl MoneyPredicate {
    /// Renders the full filter document
    ///
    /// `decompose("price", Gt, m)` renders as
    /// `{"price.amount": {"$gt": ...}, "price.currency": {"$eq": "USD"}}`.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(self.amount.path.clone(), self.amount.to_document());
        doc.insert(self.currency.path.clone(), self.currency.to_document());
        Value::Object(doc)
    }
}

/// Decomposes a Money comparison operand into field predicates
///
/// The amount condition carries the caller's operator; the currency condition
/// is always an exact code-equality check, whichever operator was requested.
pub fn decompose(path: &str, op: ComparisonOp, operand: &Money) -> MoneyPredicate {
    let raw = RawMoney::from(operand);
    MoneyPredicate {
        amount: FieldCondition {
            path: format!("{path}.amount"),
            op,
            value: Value::from(raw.amount),
        },
        currency: FieldCondition {
            path: format!("{path}.currency"),
            op: ComparisonOp::Eq,
            value: Value::String(raw.currency),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use money_core::{Currency, Money};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn usd_money() -> Money {
        Money::new(dec!(9.99), Currency::new("USD", "$", "US Dollar", 2))
    }

    #[test]
    fn test_decompose_paths_and_operator() {
        let predicate = decompose("price", ComparisonOp::Gt, &usd_money());
        assert_eq!(predicate.amount.path, "price.amount");
        assert_eq!(predicate.amount.op, ComparisonOp::Gt);
        assert_eq!(predicate.currency.path, "price.currency");
        assert_eq!(predicate.currency.op, ComparisonOp::Eq);
    }

    #[test]
    fn test_currency_condition_is_equality_for_every_operator() {
        for op in ComparisonOp::ALL {
            let predicate = decompose("price", op, &usd_money());
            assert_eq!(predicate.currency.op, ComparisonOp::Eq);
            assert_eq!(predicate.currency.value, json!("USD"));
        }
    }

    #[test]
    fn test_to_document_shape() {
        let predicate = decompose("price", ComparisonOp::Lte, &usd_money());
        assert_eq!(
            predicate.to_document(),
            json!({
                "price.amount": {"$lte": 9.99},
                "price.currency": {"$eq": "USD"},
            })
        );
    }
}
