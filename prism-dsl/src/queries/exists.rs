use super::builder::QueryBuilder;
use crate::base::Query;
use serde_json::Value;

/// Documents that have an indexed value for `field`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsQuery(Query);

impl ExistsQuery {
    pub fn new(field: impl Into<String>) -> Self {
        let mut query = Self(Query::new("exists"));
        query.field(field);
        query
    }

    pub fn field(&mut self, field: impl Into<String>) -> &mut Self {
        self.0.set("field", Value::String(field.into()));
        self
    }
}

impl QueryBuilder for ExistsQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<ExistsQuery> for Query {
    fn from(query: ExistsQuery) -> Self {
        query.0
    }
}

impl From<&mut ExistsQuery> for Query {
    fn from(query: &mut ExistsQuery) -> Self {
        query.0.clone()
    }
}
