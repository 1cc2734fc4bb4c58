//! Store Codec - the document-store-facing surface of the money core
//!
//! This crate adapts [`money_core`] values to the raw representation a
//! document store persists and queries:
//! - `codec`: cast-in/cast-out between `Money` and the stored
//!   `{amount, currency, createdAt}` record
//! - `query`: decomposition of Money comparison operands into per-field
//!   predicates (amount comparison AND currency-code equality)
//!
//! No database driver lives here; the actual persistence layer is an
//! external collaborator that consumes these contracts.

pub mod codec;
pub mod query;

pub use codec::{MoneyCodec, RawAmount, RawMoney};
pub use query::{decompose, ComparisonOp, FieldCondition, MoneyPredicate};
