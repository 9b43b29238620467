//! Query builders.
//!
//! Every query carries `boost` and `_name`; field-keyed queries nest their
//! options under the field.

mod bool_query;
mod builder;
mod constant_score;
mod exists;
mod match_all;
mod match_query;
mod range;
mod term;

pub use bool_query::{BoolQuery, Occur};
pub use builder::QueryBuilder;
pub use constant_score::ConstantScoreQuery;
pub use exists::ExistsQuery;
pub use match_all::MatchAllQuery;
pub use match_query::MatchQuery;
pub use range::RangeQuery;
pub use term::TermQuery;
