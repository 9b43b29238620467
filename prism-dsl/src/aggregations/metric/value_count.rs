use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, MissingOption, ScriptOption};
use crate::base::Aggregation;

/// Counts the values extracted from the aggregated documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCountAggregation(Aggregation);

impl ValueCountAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "value_count", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "value_count", None))
    }
}

impl AggregationBuilder for ValueCountAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for ValueCountAggregation {}
impl ScriptOption for ValueCountAggregation {}
impl MissingOption for ValueCountAggregation {}

impl From<ValueCountAggregation> for Aggregation {
    fn from(agg: ValueCountAggregation) -> Self {
        agg.0
    }
}

impl From<&mut ValueCountAggregation> for Aggregation {
    fn from(agg: &mut ValueCountAggregation) -> Self {
        agg.0.clone()
    }
}
