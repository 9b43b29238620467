use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, FormatOption, MissingOption, ScriptOption};
use crate::base::Aggregation;

/// Single-value metric averaging numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct AvgAggregation(Aggregation);

impl AvgAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "avg", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "avg", None))
    }
}

impl AggregationBuilder for AvgAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for AvgAggregation {}
impl ScriptOption for AvgAggregation {}
impl MissingOption for AvgAggregation {}
impl FormatOption for AvgAggregation {}

impl From<AvgAggregation> for Aggregation {
    fn from(agg: AvgAggregation) -> Self {
        agg.0
    }
}

impl From<&mut AvgAggregation> for Aggregation {
    fn from(agg: &mut AvgAggregation) -> Self {
        agg.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_avg_grade() {
        let mut agg = AvgAggregation::new("avg_grade", "grade");
        agg.missing(10).format("0.00");
        assert_eq!(
            agg.to_json(),
            json!({"avg": {"field": "grade", "missing": 10, "format": "0.00"}})
        );
    }
}
