use super::{insert_entry, Body, BodyValue};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Family base for every aggregation builder.
///
/// Owns its sub-aggregations outright: attaching moves the child into this
/// node, so a child never has two parents and the tree cannot form a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    name: String,
    wire_type: Cow<'static, str>,
    body: Body,
    meta: Option<Value>,
    children: BTreeMap<String, Aggregation>,
}

impl Aggregation {
    pub fn new(name: impl Into<String>, wire_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            wire_type: wire_type.into(),
            body: Body::new(),
            meta: None,
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wire_type(&self) -> &str {
        &self.wire_type
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn get(&self, key: &str) -> Option<&BodyValue> {
        self.body.get(key)
    }

    /// Set an option, overwriting any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<BodyValue>) -> &mut Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    /// Set a named entry inside a map-valued option (e.g. `filters`).
    pub fn set_entry(&mut self, key: &str, entry: &str, value: impl Into<BodyValue>) -> &mut Self {
        insert_entry(&mut self.body, key, entry, value.into());
        self
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: Value) -> &mut Self {
        self.meta = Some(meta);
        self
    }

    pub fn children(&self) -> &BTreeMap<String, Aggregation> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Aggregation> {
        self.children.get(name)
    }

    /// Attach a sub-aggregation under its own name, returning the child it
    /// replaced, if any.
    pub fn attach(&mut self, child: Aggregation) -> Option<Aggregation> {
        attach_named(&mut self.children, &self.name, child)
    }

    /// Detach a sub-aggregation by name. Absent names are a no-op.
    pub fn detach(&mut self, name: &str) -> Option<Aggregation> {
        self.children.remove(name)
    }
}

/// Inserts `child` into `children` under its own name. `owner` only labels
/// the replacement log line.
pub(crate) fn attach_named(
    children: &mut BTreeMap<String, Aggregation>,
    owner: &str,
    child: Aggregation,
) -> Option<Aggregation> {
    let previous = children.insert(child.name.clone(), child);
    if let Some(ref replaced) = previous {
        tracing::debug!(
            "Sub-aggregation '{}' replaced under '{}'",
            replaced.name,
            owner
        );
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_replaces_same_name() {
        let mut parent = Aggregation::new("by_day", "date_histogram");
        assert!(parent.attach(Aggregation::new("total", "sum")).is_none());

        let replaced = parent.attach(Aggregation::new("total", "avg"));
        assert_eq!(
            replaced.map(|a| a.wire_type().to_string()),
            Some("sum".to_string())
        );
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.child("total").map(|a| a.wire_type()), Some("avg"));
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let mut parent = Aggregation::new("by_day", "date_histogram");
        parent.attach(Aggregation::new("total", "sum"));
        let before = parent.clone();

        assert!(parent.detach("missing").is_none());
        assert_eq!(parent, before);

        assert!(parent.detach("total").is_some());
        assert!(parent.children().is_empty());
    }

    #[test]
    fn test_set_and_meta() {
        let mut agg = Aggregation::new("prices", "sum");
        agg.set("field", json!("price"))
            .set_meta(json!({"color": "blue"}));
        assert_eq!(agg.get("field"), Some(&BodyValue::Scalar(json!("price"))));
        assert_eq!(agg.metadata(), Some(&json!({"color": "blue"})));
    }
}
