use super::builder::QueryBuilder;
use crate::base::Query;
use serde_json::{json, Value};

/// Exact, unanalyzed match on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery(Query);

impl TermQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut query = Self(Query::field_keyed("term", field));
        query.value(value);
        query
    }

    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.set("value", value.into());
        self
    }

    pub fn case_insensitive(&mut self, enabled: bool) -> &mut Self {
        self.0.set("case_insensitive", json!(enabled));
        self
    }
}

impl QueryBuilder for TermQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<TermQuery> for Query {
    fn from(query: TermQuery) -> Self {
        query.0
    }
}

impl From<&mut TermQuery> for Query {
    fn from(query: &mut TermQuery) -> Self {
        query.0.clone()
    }
}
