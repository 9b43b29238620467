use super::builder::QueryBuilder;
use crate::base::Query;
use serde_json::Value;

/// Analyzed full-text match on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery(Query);

impl MatchQuery {
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        let mut built = Self(Query::field_keyed("match", field));
        built.0.set("query", Value::String(query.into()));
        built
    }

    /// `or` (default) or `and`.
    pub fn operator(&mut self, operator: impl Into<String>) -> &mut Self {
        self.0.set("operator", Value::String(operator.into()));
        self
    }

    /// Edit distance: `AUTO`, `0`, `1`, `2`, ...
    pub fn fuzziness(&mut self, fuzziness: impl Into<Value>) -> &mut Self {
        self.0.set("fuzziness", fuzziness.into());
        self
    }

    pub fn analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        self.0.set("analyzer", Value::String(analyzer.into()));
        self
    }

    /// Count or percentage, e.g. `2` or `"75%"`.
    pub fn minimum_should_match(&mut self, minimum: impl Into<Value>) -> &mut Self {
        self.0.set("minimum_should_match", minimum.into());
        self
    }
}

impl QueryBuilder for MatchQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<MatchQuery> for Query {
    fn from(query: MatchQuery) -> Self {
        query.0
    }
}

impl From<&mut MatchQuery> for Query {
    fn from(query: &mut MatchQuery) -> Self {
        query.0.clone()
    }
}
