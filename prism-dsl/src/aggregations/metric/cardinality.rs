use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, FormatOption, MissingOption, ScriptOption};
use crate::base::Aggregation;
use serde_json::json;

/// Approximate count of distinct values.
#[derive(Debug, Clone, PartialEq)]
pub struct CardinalityAggregation(Aggregation);

impl CardinalityAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "cardinality", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "cardinality", None))
    }

    /// Counts below this threshold are expected to be close to accurate.
    pub fn precision_threshold(&mut self, threshold: u64) -> &mut Self {
        self.0.set("precision_threshold", json!(threshold));
        self
    }
}

impl AggregationBuilder for CardinalityAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for CardinalityAggregation {}
impl ScriptOption for CardinalityAggregation {}
impl MissingOption for CardinalityAggregation {}
impl FormatOption for CardinalityAggregation {}

impl From<CardinalityAggregation> for Aggregation {
    fn from(agg: CardinalityAggregation) -> Self {
        agg.0
    }
}

impl From<&mut CardinalityAggregation> for Aggregation {
    fn from(agg: &mut CardinalityAggregation) -> Self {
        agg.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_threshold() {
        let mut agg = CardinalityAggregation::new("author_count", "author");
        agg.precision_threshold(100);
        assert_eq!(
            agg.to_json(),
            json!({"cardinality": {"field": "author", "precision_threshold": 100}})
        );
    }
}
