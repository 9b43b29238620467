use crate::base::Query;
use crate::serialize::Serializer;
use serde_json::{json, Value};

/// Access to the underlying [`Query`] plus the options every query shares.
pub trait QueryBuilder {
    fn query(&self) -> &Query;
    fn query_mut(&mut self) -> &mut Query;

    /// Relevance score multiplier.
    fn boost(&mut self, factor: f64) -> &mut Self {
        self.query_mut().set("boost", json!(factor));
        self
    }

    /// Name reported in `matched_queries` of each hit.
    fn query_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.query_mut().set("_name", Value::String(name.into()));
        self
    }

    fn to_json(&self) -> Value {
        Serializer::default().query(self.query())
    }
}

impl QueryBuilder for Query {
    fn query(&self) -> &Query {
        self
    }

    fn query_mut(&mut self) -> &mut Query {
        self
    }
}

impl From<&mut Query> for Query {
    fn from(query: &mut Query) -> Self {
        query.clone()
    }
}
