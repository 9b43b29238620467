//! Builder tree -> request document
//!
//! Depth-first walk producing plain `serde_json::Value`s:
//!
//! - aggregation: `{ <type>: <body>, "meta"?: .., "aggs"?: { <child>: <child doc> } }`
//! - query: `{ <type>: <body> }` or `{ <type>: { <field>: <body> } }`
//! - script: `<body>`
//!
//! Serialization only reads the tree and cannot fail; rendering to a
//! string is the only fallible step.

use crate::base::{Aggregation, Body, BodyValue, Node, Query, Script};
use crate::config::SerializeConfig;
use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Anything the serializer can turn into a document.
pub trait Document {
    fn to_document(&self, serializer: &Serializer) -> Value;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    config: SerializeConfig,
}

impl Serializer {
    pub fn new(config: SerializeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializeConfig {
        &self.config
    }

    pub fn to_value<D: Document + ?Sized>(&self, document: &D) -> Value {
        document.to_document(self)
    }

    pub fn to_string<D: Document + ?Sized>(&self, document: &D) -> Result<String> {
        let value = self.to_value(document);
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(rendered)
    }

    pub fn node(&self, node: &Node) -> Value {
        match node {
            Node::Query(query) => self.query(query),
            Node::Aggregation(agg) => self.aggregation(agg),
            Node::Script(script) => self.script(script),
        }
    }

    pub fn query(&self, query: &Query) -> Value {
        tracing::trace!("Serializing {} query", query.wire_type());
        let body = self.body(query.body());
        let inner = match query.field() {
            Some(field) => single(field, body),
            None => body,
        };
        single(query.wire_type(), inner)
    }

    pub fn aggregation(&self, agg: &Aggregation) -> Value {
        tracing::trace!("Serializing {} aggregation '{}'", agg.wire_type(), agg.name());
        let mut doc = Map::new();
        doc.insert(agg.wire_type().to_string(), self.body(agg.body()));
        if let Some(meta) = agg.metadata() {
            doc.insert("meta".to_string(), meta.clone());
        }
        if !agg.children().is_empty() {
            doc.insert(
                self.config.aggs_key.as_str().to_string(),
                self.aggregations(agg.children()),
            );
        }
        Value::Object(doc)
    }

    /// Named aggregation section: `{ <name>: <aggregation doc>, .. }`
    pub fn aggregations(&self, aggs: &BTreeMap<String, Aggregation>) -> Value {
        Value::Object(
            aggs.iter()
                .map(|(name, agg)| (name.clone(), self.aggregation(agg)))
                .collect(),
        )
    }

    pub fn script(&self, script: &Script) -> Value {
        self.body(script.body())
    }

    pub fn body(&self, body: &Body) -> Value {
        Value::Object(
            body.iter()
                .map(|(key, value)| (key.clone(), self.value(value)))
                .collect(),
        )
    }

    fn value(&self, value: &BodyValue) -> Value {
        match value {
            BodyValue::Scalar(v) => v.clone(),
            BodyValue::Node(node) => self.node(node),
            BodyValue::List(items) => Value::Array(items.iter().map(|v| self.value(v)).collect()),
            BodyValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, v)| (key.clone(), self.value(v)))
                    .collect(),
            ),
        }
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

impl Document for Node {
    fn to_document(&self, serializer: &Serializer) -> Value {
        serializer.node(self)
    }
}

impl Document for Query {
    fn to_document(&self, serializer: &Serializer) -> Value {
        serializer.query(self)
    }
}

impl Document for Aggregation {
    fn to_document(&self, serializer: &Serializer) -> Value {
        serializer.aggregation(self)
    }
}

impl Document for Script {
    fn to_document(&self, serializer: &Serializer) -> Value {
        serializer.script(self)
    }
}

impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Serializer::default().node(self), serializer)
    }
}

impl serde::Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Serializer::default().query(self), serializer)
    }
}

impl serde::Serialize for Aggregation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Serializer::default().aggregation(self), serializer)
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&Serializer::default().script(self), serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AggsKey;
    use serde_json::json;

    fn priced_sum() -> Aggregation {
        let mut sum = Aggregation::new("total_sales", "sum");
        sum.set("field", json!("price"));
        sum
    }

    #[test]
    fn test_aggregation_without_children() {
        let doc = Serializer::default().aggregation(&priced_sum());
        assert_eq!(doc, json!({"sum": {"field": "price"}}));
    }

    #[test]
    fn test_empty_body_is_object() {
        let doc = Serializer::default().aggregation(&Aggregation::new("all", "global"));
        assert_eq!(doc, json!({"global": {}}));
    }

    #[test]
    fn test_children_and_meta() {
        let mut parent = Aggregation::new("by_month", "date_histogram");
        parent
            .set("field", json!("date"))
            .set_meta(json!({"owner": "sales"}));
        parent.attach(priced_sum());

        let doc = Serializer::default().aggregation(&parent);
        assert_eq!(
            doc,
            json!({
                "date_histogram": {"field": "date"},
                "meta": {"owner": "sales"},
                "aggs": {"total_sales": {"sum": {"field": "price"}}}
            })
        );
    }

    #[test]
    fn test_configured_children_key() {
        let mut parent = Aggregation::new("by_month", "date_histogram");
        parent.attach(priced_sum());

        let serializer = Serializer::new(SerializeConfig {
            aggs_key: AggsKey::Aggregations,
            pretty: false,
        });
        let doc = serializer.aggregation(&parent);
        assert!(doc.get("aggregations").is_some());
        assert!(doc.get("aggs").is_none());
    }

    #[test]
    fn test_script_embeds_as_body() {
        let mut sum = Aggregation::new("hat_prices", "sum");
        sum.set("script", Script::inline("doc.price.value"));
        let doc = Serializer::default().aggregation(&sum);
        assert_eq!(doc, json!({"sum": {"script": {"source": "doc.price.value"}}}));
    }

    #[test]
    fn test_field_keyed_query() {
        let mut term = Query::field_keyed("term", "user");
        term.set("value", json!("kimchy"));
        assert_eq!(
            Serializer::default().query(&term),
            json!({"term": {"user": {"value": "kimchy"}}})
        );
    }

    #[test]
    fn test_to_string_is_stable() {
        let mut parent = Aggregation::new("by_month", "date_histogram");
        parent
            .set("field", json!("date"))
            .set("min_doc_count", json!(0));
        parent.attach(priced_sum());

        let serializer = Serializer::default();
        let first = serializer.to_string(&parent).unwrap();
        let second = serializer.to_string(&parent).unwrap();
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&parent).unwrap(), first);
    }
}
