use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, FormatOption, MissingOption, ScriptOption};
use crate::base::Aggregation;

/// Smallest numeric value among the aggregated documents.
#[derive(Debug, Clone, PartialEq)]
pub struct MinAggregation(Aggregation);

/// Largest numeric value among the aggregated documents.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxAggregation(Aggregation);

impl MinAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "min", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "min", None))
    }
}

impl MaxAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "max", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "max", None))
    }
}

impl AggregationBuilder for MinAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl AggregationBuilder for MaxAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for MinAggregation {}
impl ScriptOption for MinAggregation {}
impl MissingOption for MinAggregation {}
impl FormatOption for MinAggregation {}

impl FieldOption for MaxAggregation {}
impl ScriptOption for MaxAggregation {}
impl MissingOption for MaxAggregation {}
impl FormatOption for MaxAggregation {}

impl From<MinAggregation> for Aggregation {
    fn from(agg: MinAggregation) -> Self {
        agg.0
    }
}

impl From<&mut MinAggregation> for Aggregation {
    fn from(agg: &mut MinAggregation) -> Self {
        agg.0.clone()
    }
}

impl From<MaxAggregation> for Aggregation {
    fn from(agg: MaxAggregation) -> Self {
        agg.0
    }
}

impl From<&mut MaxAggregation> for Aggregation {
    fn from(agg: &mut MaxAggregation) -> Self {
        agg.0.clone()
    }
}
