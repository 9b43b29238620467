use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{FieldOption, FormatOption, MissingOption, ScriptOption};
use crate::base::Aggregation;

/// Single-value metric summing numeric values extracted from the aggregated
/// documents, either from `field` or from a script.
#[derive(Debug, Clone, PartialEq)]
pub struct SumAggregation(Aggregation);

impl SumAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "sum", Some(field.into())))
    }

    /// Sum without a field, for script-driven values.
    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "sum", None))
    }
}

impl AggregationBuilder for SumAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for SumAggregation {}
impl ScriptOption for SumAggregation {}
impl MissingOption for SumAggregation {}
impl FormatOption for SumAggregation {}

impl From<SumAggregation> for Aggregation {
    fn from(agg: SumAggregation) -> Self {
        agg.0
    }
}

impl From<&mut SumAggregation> for Aggregation {
    fn from(agg: &mut SumAggregation) -> Self {
        agg.0.clone()
    }
}
