//! Filter expressions for selecting transactions in searches and saved
//! reports: "match transactions where (A or B) and (C or D)".

mod builder;
mod condition;
mod evaluate;
mod expression;
mod field;
mod id_set;
mod serialize;

pub use condition::{Condition, ConditionPatch, ConditionValue, default_condition};
pub use evaluate::{
    TRANSFER, UNCATEGORIZED, condition_matches, count_matches, filter_records, matches,
};
pub use expression::{Expression, Group};
pub use field::FieldKind;
pub use id_set::{EntityId, IdSet};
pub use serialize::{FILTER_QUERY_KEY, decode_query, encode_query, from_json, to_json};
