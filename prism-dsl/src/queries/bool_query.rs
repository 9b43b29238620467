use super::builder::QueryBuilder;
use crate::base::{expect_query, Element, Node, Query};
use crate::error::Result;
use serde_json::Value;

/// Occurrence type of a bool clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    Must,
    Filter,
    Should,
    MustNot,
}

impl Occur {
    pub fn as_str(&self) -> &'static str {
        match self {
            Occur::Must => "must",
            Occur::Filter => "filter",
            Occur::Should => "should",
            Occur::MustNot => "must_not",
        }
    }
}

/// Boolean combination of other queries.
///
/// Clause methods append: calling `must` twice yields two `must` clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery(Query);

impl BoolQuery {
    pub fn new() -> Self {
        Self(Query::new("bool"))
    }

    /// Clause that must match and contributes to the score.
    pub fn must(&mut self, query: impl Into<Query>) -> &mut Self {
        self.clause(Occur::Must, query.into())
    }

    /// Clause that must match, in filter context (no scoring).
    pub fn filter(&mut self, query: impl Into<Query>) -> &mut Self {
        self.clause(Occur::Filter, query.into())
    }

    pub fn should(&mut self, query: impl Into<Query>) -> &mut Self {
        self.clause(Occur::Should, query.into())
    }

    pub fn must_not(&mut self, query: impl Into<Query>) -> &mut Self {
        self.clause(Occur::MustNot, query.into())
    }

    /// Runtime-checked clause adder.
    pub fn try_clause(&mut self, occur: Occur, query: impl Into<Element>) -> Result<&mut Self> {
        let query = expect_query(query.into())?;
        Ok(self.clause(occur, query))
    }

    pub fn minimum_should_match(&mut self, minimum: impl Into<Value>) -> &mut Self {
        self.0.set("minimum_should_match", minimum.into());
        self
    }

    fn clause(&mut self, occur: Occur, query: Query) -> &mut Self {
        self.0.push(occur.as_str(), Node::Query(query));
        self
    }
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for BoolQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<BoolQuery> for Query {
    fn from(query: BoolQuery) -> Self {
        query.0
    }
}

impl From<&mut BoolQuery> for Query {
    fn from(query: &mut BoolQuery) -> Self {
        query.0.clone()
    }
}
