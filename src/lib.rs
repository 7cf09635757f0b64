//! [![github]](https://github.com/AnthonyDickson/budgeteur-rs)&ensp;
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//!
//! <br>
//!
//! Transaction filters for Budgeteur.
//!
//! A filter is an [Expression]: groups of conditions that are OR-ed within a
//! group and AND-ed across groups. The filter editor changes an expression
//! through the operations on [Expression], the search bar and report engine
//! test transactions with [matches], and saved reports store the expression
//! with [to_json].

#![warn(missing_docs)]

pub mod filter;
pub mod options;
pub mod record;

pub use filter::{
    Condition, ConditionPatch, Expression, FieldKind, Group, IdSet, count_matches, decode_query,
    encode_query, filter_records, from_json, matches, to_json,
};
pub use options::OptionCatalog;
pub use record::{Filterable, TransactionRecord, parse_records};

/// The errors that may occur when loading or storing filters.
///
/// Editing and evaluating a filter cannot fail; only conversions to and from
/// stored forms return errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The JSON did not describe a filter expression.
    ///
    /// Unknown field names, whether decoded from JSON or parsed with
    /// `FieldKind::from_str`, and values of the wrong shape for their field
    /// also produce this error.
    #[error("invalid filter expression: {0}")]
    InvalidExpression(String),

    /// A group in the filter had no conditions.
    ///
    /// Every group must hold at least one condition. The index is the
    /// position of the offending group.
    #[error("filter group {0} has no conditions")]
    EmptyGroup(usize),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The URL query string could not be encoded or decoded.
    #[error("invalid filter query string: {0}")]
    InvalidQuery(String),

    /// The JSON did not describe a list of transactions.
    #[error("invalid transaction records: {0}")]
    InvalidRecords(String),
}
