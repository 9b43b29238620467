use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{
    BucketOrderOptions, FieldOption, FormatOption, HistogramOptions, MissingOption, ScriptOption,
    TimeZoneOption,
};
use crate::base::Aggregation;
use serde_json::Value;

/// Histogram over date values, bucketed by calendar or fixed intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct DateHistogramAggregation(Aggregation);

impl DateHistogramAggregation {
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        calendar_interval: impl Into<String>,
    ) -> Self {
        let mut agg = Self(field_base(name, "date_histogram", Some(field.into())));
        agg.calendar_interval(calendar_interval);
        agg
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "date_histogram", None))
    }

    /// Calendar-aware unit: `minute`, `hour`, `day`, `week`, `month`,
    /// `quarter`, `year`.
    pub fn calendar_interval(&mut self, interval: impl Into<String>) -> &mut Self {
        self.0
            .set("calendar_interval", Value::String(interval.into()));
        self
    }

    /// Fixed SI duration such as `90m` or `30d`.
    pub fn fixed_interval(&mut self, interval: impl Into<String>) -> &mut Self {
        self.0.set("fixed_interval", Value::String(interval.into()));
        self
    }
}

impl AggregationBuilder for DateHistogramAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for DateHistogramAggregation {}
impl ScriptOption for DateHistogramAggregation {}
impl MissingOption for DateHistogramAggregation {}
impl FormatOption for DateHistogramAggregation {}
impl BucketOrderOptions for DateHistogramAggregation {}
impl HistogramOptions for DateHistogramAggregation {}
impl TimeZoneOption for DateHistogramAggregation {}

impl From<DateHistogramAggregation> for Aggregation {
    fn from(agg: DateHistogramAggregation) -> Self {
        agg.0
    }
}

impl From<&mut DateHistogramAggregation> for Aggregation {
    fn from(agg: &mut DateHistogramAggregation) -> Self {
        agg.0.clone()
    }
}
