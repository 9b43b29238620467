//! Top-level search request body

use crate::base::{
    attach_named, expect_aggregation, expect_query, push_value, Aggregation, Body, BodyValue,
    Element, Node, Query, SortOrder,
};
use crate::error::Result;
use crate::serialize::{Document, Serializer};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Body of a `_search` request: query, aggregations and paging.
///
/// ```text
/// { "query": {..}, "aggs": { <name>: {..} }, "size": 0, .. }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    body: Body,
    aggs: BTreeMap<String, Aggregation>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&mut self, query: impl Into<Query>) -> &mut Self {
        self.body
            .insert("query".to_string(), Node::Query(query.into()).into());
        self
    }

    pub fn try_query(&mut self, query: impl Into<Element>) -> Result<&mut Self> {
        let query = expect_query(query.into())?;
        Ok(self.query(query))
    }

    /// Filter applied to hits after aggregations are computed.
    pub fn post_filter(&mut self, query: impl Into<Query>) -> &mut Self {
        self.body
            .insert("post_filter".to_string(), Node::Query(query.into()).into());
        self
    }

    pub fn agg(&mut self, agg: impl Into<Aggregation>) -> &mut Self {
        attach_named(&mut self.aggs, "request", agg.into());
        self
    }

    pub fn aggs<I, A>(&mut self, aggs: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Aggregation>,
    {
        for agg in aggs {
            self.agg(agg);
        }
        self
    }

    pub fn try_agg(&mut self, agg: impl Into<Element>) -> Result<&mut Self> {
        let agg = expect_aggregation(agg.into())?;
        Ok(self.agg(agg))
    }

    pub fn remove_agg(&mut self, name: &str) -> Option<Aggregation> {
        self.aggs.remove(name)
    }

    pub fn aggregations(&self) -> &BTreeMap<String, Aggregation> {
        &self.aggs
    }

    pub fn size(&mut self, size: u64) -> &mut Self {
        self.set("size", json!(size))
    }

    pub fn from(&mut self, from: u64) -> &mut Self {
        self.set("from", json!(from))
    }

    /// Append a sort clause: `{ <field>: { "order": .. } }`.
    pub fn sort(&mut self, field: &str, order: SortOrder) -> &mut Self {
        push_value(
            &mut self.body,
            "sort",
            BodyValue::Scalar(json!({ field: { "order": order.as_str() } })),
        );
        self
    }

    /// `_source` filtering: `false`, a field list, or `{includes, excludes}`.
    pub fn source(&mut self, source: impl Into<Value>) -> &mut Self {
        self.set("_source", source.into())
    }

    /// `true`, `false`, or an exact-count threshold.
    pub fn track_total_hits(&mut self, track: impl Into<Value>) -> &mut Self {
        self.set("track_total_hits", track.into())
    }

    pub fn min_score(&mut self, score: f64) -> &mut Self {
        self.set("min_score", json!(score))
    }

    /// Search timeout as a time unit string, e.g. `5s`.
    pub fn timeout(&mut self, timeout: impl Into<String>) -> &mut Self {
        self.set("timeout", Value::String(timeout.into()))
    }

    fn set(&mut self, key: &str, value: Value) -> &mut Self {
        self.body.insert(key.to_string(), BodyValue::Scalar(value));
        self
    }

    pub fn to_json(&self) -> Value {
        Serializer::default().to_value(self)
    }
}

impl Document for SearchRequest {
    fn to_document(&self, serializer: &Serializer) -> Value {
        let mut doc = match serializer.body(&self.body) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if !self.aggs.is_empty() {
            doc.insert(
                serializer.config().aggs_key.as_str().to_string(),
                serializer.aggregations(&self.aggs),
            );
        }
        Value::Object(doc)
    }
}

impl serde::Serialize for SearchRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::SumAggregation;
    use crate::queries::{ConstantScoreQuery, MatchQuery};

    #[test]
    fn test_hat_prices_request() {
        let mut request = SearchRequest::new();
        request
            .query(ConstantScoreQuery::new(MatchQuery::new("type", "hat")))
            .agg(SumAggregation::new("hat_prices", "price"))
            .size(0);

        assert_eq!(
            request.to_json(),
            json!({
                "query": {"constant_score": {"filter": {"match": {"type": {"query": "hat"}}}}},
                "aggs": {"hat_prices": {"sum": {"field": "price"}}},
                "size": 0
            })
        );
    }

    #[test]
    fn test_sort_appends() {
        let mut request = SearchRequest::new();
        request
            .sort("post_date", SortOrder::Desc)
            .sort("user", SortOrder::Asc);
        assert_eq!(
            request.to_json()["sort"],
            json!([{"post_date": {"order": "desc"}}, {"user": {"order": "asc"}}])
        );
    }

    #[test]
    fn test_try_query_rejects_aggregation() {
        let mut request = SearchRequest::new();
        assert!(request
            .try_query(Aggregation::from(SumAggregation::new("a", "b")))
            .is_err());
        assert_eq!(request.to_json(), json!({}));
    }

    #[test]
    fn test_agg_same_name_replaces() {
        let mut request = SearchRequest::new();
        request
            .agg(SumAggregation::new("prices", "price"))
            .agg(Aggregation::new("prices", "avg"));

        assert_eq!(request.aggregations().len(), 1);
        assert_eq!(request.to_json(), json!({"aggs": {"prices": {"avg": {}}}}));
    }
}
