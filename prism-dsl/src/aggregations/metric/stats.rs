use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, FormatOption, MissingOption, ScriptOption};
use crate::base::Aggregation;

/// Multi-value metric returning `min`, `max`, `sum`, `count` and `avg`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsAggregation(Aggregation);

impl StatsAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "stats", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "stats", None))
    }
}

impl AggregationBuilder for StatsAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for StatsAggregation {}
impl ScriptOption for StatsAggregation {}
impl MissingOption for StatsAggregation {}
impl FormatOption for StatsAggregation {}

impl From<StatsAggregation> for Aggregation {
    fn from(agg: StatsAggregation) -> Self {
        agg.0
    }
}

impl From<&mut StatsAggregation> for Aggregation {
    fn from(agg: &mut StatsAggregation) -> Self {
        agg.0.clone()
    }
}
