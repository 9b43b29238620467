use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{
    BucketOrderOptions, FieldOption, FormatOption, HistogramOptions, IntervalOption, MissingOption,
    ScriptOption,
};
use crate::base::Aggregation;
use serde_json::Value;

/// Fixed-size numeric buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramAggregation(Aggregation);

impl HistogramAggregation {
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        interval: impl Into<Value>,
    ) -> Self {
        let mut agg = Self(field_base(name, "histogram", Some(field.into())));
        agg.interval(interval);
        agg
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "histogram", None))
    }
}

impl AggregationBuilder for HistogramAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for HistogramAggregation {}
impl ScriptOption for HistogramAggregation {}
impl MissingOption for HistogramAggregation {}
impl FormatOption for HistogramAggregation {}
impl BucketOrderOptions for HistogramAggregation {}
impl IntervalOption for HistogramAggregation {}
impl HistogramOptions for HistogramAggregation {}

impl From<HistogramAggregation> for Aggregation {
    fn from(agg: HistogramAggregation) -> Self {
        agg.0
    }
}

impl From<&mut HistogramAggregation> for Aggregation {
    fn from(agg: &mut HistogramAggregation) -> Self {
        agg.0.clone()
    }
}
