//! Metrics aggregations: compute values over the documents in scope.
//!
//! All of them accept `field`, `script`, `missing` and (except
//! `value_count`) `format`.

mod avg;
mod cardinality;
mod minmax;
mod stats;
mod sum;
mod value_count;

pub use avg::AvgAggregation;
pub use cardinality::CardinalityAggregation;
pub use minmax::{MaxAggregation, MinAggregation};
pub use stats::StatsAggregation;
pub use sum::SumAggregation;
pub use value_count::ValueCountAggregation;
