mod bucket;
mod builder;
mod metric;
pub mod options;

pub use bucket::{
    AutoDateHistogramAggregation, DateHistogramAggregation, FiltersAggregation,
    HistogramAggregation, TermsAggregation,
};
pub use builder::AggregationBuilder;
pub use metric::{
    AvgAggregation, CardinalityAggregation, MaxAggregation, MinAggregation, StatsAggregation,
    SumAggregation, ValueCountAggregation,
};
pub use options::{
    AutoHistogramOptions, BucketOrderOptions, FieldOption, FormatOption, HistogramOptions,
    IntervalOption, MissingOption, ScriptOption, TimeZoneOption,
};
