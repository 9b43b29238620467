//! Factory functions, one per builder, for terse request construction:
//!
//! ```
//! use prism_dsl::dsl::*;
//! use prism_dsl::AggregationBuilder;
//!
//! let mut sales = auto_date_histogram_aggregation("sales_over_time", "date", 15);
//! sales.agg(sum_aggregation("total_sales", "price"));
//! assert!(sales.to_json()["aggs"]["total_sales"].is_object());
//! ```

use crate::aggregations::{
    AutoDateHistogramAggregation, AvgAggregation, CardinalityAggregation, DateHistogramAggregation,
    FiltersAggregation, HistogramAggregation, MaxAggregation, MinAggregation, StatsAggregation,
    SumAggregation, TermsAggregation, ValueCountAggregation,
};
use crate::base::{Query, Script};
use crate::queries::{
    BoolQuery, ConstantScoreQuery, ExistsQuery, MatchAllQuery, MatchQuery, RangeQuery, TermQuery,
};
use crate::request::SearchRequest;
use serde_json::Value;

pub fn search_request() -> SearchRequest {
    SearchRequest::new()
}

pub fn inline_script(source: impl Into<String>) -> Script {
    Script::inline(source)
}

pub fn stored_script(id: impl Into<String>) -> Script {
    Script::stored(id)
}

// ============================================================================
// Queries
// ============================================================================

pub fn match_all_query() -> MatchAllQuery {
    MatchAllQuery::new()
}

pub fn term_query(field: impl Into<String>, value: impl Into<Value>) -> TermQuery {
    TermQuery::new(field, value)
}

pub fn match_query(field: impl Into<String>, query: impl Into<String>) -> MatchQuery {
    MatchQuery::new(field, query)
}

pub fn range_query(field: impl Into<String>) -> RangeQuery {
    RangeQuery::new(field)
}

pub fn exists_query(field: impl Into<String>) -> ExistsQuery {
    ExistsQuery::new(field)
}

pub fn bool_query() -> BoolQuery {
    BoolQuery::new()
}

pub fn constant_score_query(filter: impl Into<Query>) -> ConstantScoreQuery {
    ConstantScoreQuery::new(filter)
}

// ============================================================================
// Aggregations
// ============================================================================

pub fn sum_aggregation(name: impl Into<String>, field: impl Into<String>) -> SumAggregation {
    SumAggregation::new(name, field)
}

pub fn avg_aggregation(name: impl Into<String>, field: impl Into<String>) -> AvgAggregation {
    AvgAggregation::new(name, field)
}

pub fn min_aggregation(name: impl Into<String>, field: impl Into<String>) -> MinAggregation {
    MinAggregation::new(name, field)
}

pub fn max_aggregation(name: impl Into<String>, field: impl Into<String>) -> MaxAggregation {
    MaxAggregation::new(name, field)
}

pub fn stats_aggregation(name: impl Into<String>, field: impl Into<String>) -> StatsAggregation {
    StatsAggregation::new(name, field)
}

pub fn value_count_aggregation(
    name: impl Into<String>,
    field: impl Into<String>,
) -> ValueCountAggregation {
    ValueCountAggregation::new(name, field)
}

pub fn cardinality_aggregation(
    name: impl Into<String>,
    field: impl Into<String>,
) -> CardinalityAggregation {
    CardinalityAggregation::new(name, field)
}

pub fn terms_aggregation(name: impl Into<String>, field: impl Into<String>) -> TermsAggregation {
    TermsAggregation::new(name, field)
}

pub fn histogram_aggregation(
    name: impl Into<String>,
    field: impl Into<String>,
    interval: impl Into<Value>,
) -> HistogramAggregation {
    HistogramAggregation::new(name, field, interval)
}

pub fn date_histogram_aggregation(
    name: impl Into<String>,
    field: impl Into<String>,
    calendar_interval: impl Into<String>,
) -> DateHistogramAggregation {
    DateHistogramAggregation::new(name, field, calendar_interval)
}

pub fn auto_date_histogram_aggregation(
    name: impl Into<String>,
    field: impl Into<String>,
    buckets: u64,
) -> AutoDateHistogramAggregation {
    AutoDateHistogramAggregation::new(name, field, buckets)
}

pub fn filters_aggregation(name: impl Into<String>) -> FiltersAggregation {
    FiltersAggregation::new(name)
}
