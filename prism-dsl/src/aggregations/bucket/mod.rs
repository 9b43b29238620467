//! Bucket aggregations: partition documents into buckets, each of which can
//! carry its own sub-aggregations.

mod auto_date_histogram;
mod date_histogram;
mod filters;
mod histogram;
mod terms;

pub use auto_date_histogram::AutoDateHistogramAggregation;
pub use date_histogram::DateHistogramAggregation;
pub use filters::FiltersAggregation;
pub use histogram::HistogramAggregation;
pub use terms::TermsAggregation;
