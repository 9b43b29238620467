//! Builder tree primitives shared by every query, aggregation and script.
//!
//! Every builder wraps one of three family nodes ([`Query`], [`Aggregation`],
//! [`Script`]). Nodes own a fixed wire type and a body of options; the
//! serializer turns that tree into the request document.

mod aggregation;
mod check;
mod query;
mod script;

pub(crate) use aggregation::attach_named;
pub use aggregation::Aggregation;
pub use check::check_type;
pub(crate) use check::{expect_aggregation, expect_query, expect_script};
pub use query::Query;
pub use script::Script;

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Option name -> value mapping of a node.
pub type Body = BTreeMap<String, BodyValue>;

/// Builder family a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Query,
    Aggregation,
    Script,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Query => "query",
            Family::Aggregation => "aggregation",
            Family::Script => "script",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any builder node, tagged by family.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Query(Query),
    Aggregation(Aggregation),
    Script(Script),
}

impl Node {
    pub fn family(&self) -> Family {
        match self {
            Node::Query(_) => Family::Query,
            Node::Aggregation(_) => Family::Aggregation,
            Node::Script(_) => Family::Script,
        }
    }

    pub fn wire_type(&self) -> &str {
        match self {
            Node::Query(q) => q.wire_type(),
            Node::Aggregation(a) => a.wire_type(),
            Node::Script(_) => "script",
        }
    }
}

impl From<Query> for Node {
    fn from(query: Query) -> Self {
        Node::Query(query)
    }
}

impl From<Aggregation> for Node {
    fn from(agg: Aggregation) -> Self {
        Node::Aggregation(agg)
    }
}

impl From<Script> for Node {
    fn from(script: Script) -> Self {
        Node::Script(script)
    }
}

/// Dynamically typed argument accepted by the runtime-checked `try_*` setters.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node(Node),
    Scalar(Value),
}

impl Element {
    /// Human readable kind, used in type mismatch errors.
    pub fn describe(&self) -> String {
        match self {
            Element::Node(node) => format!("{} node", node.family()),
            Element::Scalar(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            }
            .to_string(),
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Query> for Element {
    fn from(query: Query) -> Self {
        Element::Node(Node::Query(query))
    }
}

impl From<Aggregation> for Element {
    fn from(agg: Aggregation) -> Self {
        Element::Node(Node::Aggregation(agg))
    }
}

impl From<Script> for Element {
    fn from(script: Script) -> Self {
        Element::Node(Node::Script(script))
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Scalar(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Scalar(Value::String(value))
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Scalar(Value::Bool(value))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Scalar(Value::from(value))
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Scalar(Value::from(value))
    }
}

/// Value stored under an option key.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyValue {
    Scalar(Value),
    Node(Box<Node>),
    List(Vec<BodyValue>),
    Map(BTreeMap<String, BodyValue>),
}

impl From<Value> for BodyValue {
    fn from(value: Value) -> Self {
        BodyValue::Scalar(value)
    }
}

impl From<Node> for BodyValue {
    fn from(node: Node) -> Self {
        BodyValue::Node(Box::new(node))
    }
}

impl From<Query> for BodyValue {
    fn from(query: Query) -> Self {
        BodyValue::Node(Box::new(Node::Query(query)))
    }
}

impl From<Script> for BodyValue {
    fn from(script: Script) -> Self {
        BodyValue::Node(Box::new(Node::Script(script)))
    }
}

/// Sort direction, shared by bucket ordering and request sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Appends `value` to the list stored under `key`, turning a previous
/// non-list value into the first list element.
pub(crate) fn push_value(body: &mut Body, key: &str, value: BodyValue) {
    match body.remove(key) {
        Some(BodyValue::List(mut items)) => {
            items.push(value);
            body.insert(key.to_string(), BodyValue::List(items));
        }
        Some(previous) => {
            body.insert(key.to_string(), BodyValue::List(vec![previous, value]));
        }
        None => {
            body.insert(key.to_string(), BodyValue::List(vec![value]));
        }
    }
}

/// Sets `entry` inside the map stored under `key`, replacing a non-map value.
pub(crate) fn insert_entry(body: &mut Body, key: &str, entry: &str, value: BodyValue) {
    let slot = body
        .entry(key.to_string())
        .or_insert_with(|| BodyValue::Map(BTreeMap::new()));
    if !matches!(slot, BodyValue::Map(_)) {
        *slot = BodyValue::Map(BTreeMap::new());
    }
    if let BodyValue::Map(entries) = slot {
        entries.insert(entry.to_string(), value);
    }
}
