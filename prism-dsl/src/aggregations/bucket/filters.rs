use crate::aggregations::builder::AggregationBuilder;
use crate::base::{expect_query, Aggregation, Element, Node, Query};
use crate::error::Result;
use serde_json::{json, Value};

/// One bucket per named filter query.
///
/// ```text
/// { "filters": { "filters": { "errors": { "match": .. }, "warnings": .. } } }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FiltersAggregation(Aggregation);

impl FiltersAggregation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Aggregation::new(name, "filters"))
    }

    /// Add a bucket. Reusing a bucket name replaces its filter.
    pub fn filter(&mut self, bucket: &str, query: impl Into<Query>) -> &mut Self {
        self.0
            .set_entry("filters", bucket, Node::Query(query.into()));
        self
    }

    pub fn try_filter(&mut self, bucket: &str, query: impl Into<Element>) -> Result<&mut Self> {
        let query = expect_query(query.into())?;
        self.0.set_entry("filters", bucket, Node::Query(query));
        Ok(self)
    }

    /// Emit an extra bucket for documents matching none of the filters.
    pub fn other_bucket(&mut self, enabled: bool) -> &mut Self {
        self.0.set("other_bucket", json!(enabled));
        self
    }

    /// Key of the extra bucket; implies `other_bucket`.
    pub fn other_bucket_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.0.set("other_bucket_key", Value::String(key.into()));
        self
    }
}

impl AggregationBuilder for FiltersAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl From<FiltersAggregation> for Aggregation {
    fn from(agg: FiltersAggregation) -> Self {
        agg.0
    }
}

impl From<&mut FiltersAggregation> for Aggregation {
    fn from(agg: &mut FiltersAggregation) -> Self {
        agg.0.clone()
    }
}
