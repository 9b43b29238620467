use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{
    AutoHistogramOptions, FieldOption, FormatOption, MissingOption, ScriptOption, TimeZoneOption,
};
use crate::base::Aggregation;

/// Date histogram where the engine picks the interval so that roughly
/// `buckets` buckets are produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoDateHistogramAggregation(Aggregation);

impl AutoDateHistogramAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>, buckets: u64) -> Self {
        let mut agg = Self(field_base(name, "auto_date_histogram", Some(field.into())));
        agg.buckets(buckets);
        agg
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "auto_date_histogram", None))
    }
}

impl AggregationBuilder for AutoDateHistogramAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for AutoDateHistogramAggregation {}
impl ScriptOption for AutoDateHistogramAggregation {}
impl MissingOption for AutoDateHistogramAggregation {}
impl FormatOption for AutoDateHistogramAggregation {}
impl AutoHistogramOptions for AutoDateHistogramAggregation {}
impl TimeZoneOption for AutoDateHistogramAggregation {}

impl From<AutoDateHistogramAggregation> for Aggregation {
    fn from(agg: AutoDateHistogramAggregation) -> Self {
        agg.0
    }
}

impl From<&mut AutoDateHistogramAggregation> for Aggregation {
    fn from(agg: &mut AutoDateHistogramAggregation) -> Self {
        agg.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shorthand_matches_setters() {
        let shorthand = AutoDateHistogramAggregation::new("sales_over_time", "date", 15);

        let mut chained = AutoDateHistogramAggregation::named("sales_over_time");
        chained.field("date").buckets(15);

        assert_eq!(shorthand, chained);
    }

    #[test]
    fn test_minimum_interval_and_format() {
        let mut agg = AutoDateHistogramAggregation::new("sales_over_time", "date", 5);
        agg.minimum_interval("minute").format("yyyy-MM-dd");

        assert_eq!(
            agg.to_json(),
            json!({"auto_date_histogram": {
                "field": "date",
                "buckets": 5,
                "minimum_interval": "minute",
                "format": "yyyy-MM-dd"
            }})
        );
    }
}
