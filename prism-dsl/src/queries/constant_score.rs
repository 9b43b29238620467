use super::builder::QueryBuilder;
use crate::base::{expect_query, Element, Node, Query};
use crate::error::Result;

/// Wraps a filter query and gives every match the same score.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantScoreQuery(Query);

impl ConstantScoreQuery {
    pub fn new(filter: impl Into<Query>) -> Self {
        let mut query = Self(Query::new("constant_score"));
        query.filter(filter);
        query
    }

    pub fn filter(&mut self, filter: impl Into<Query>) -> &mut Self {
        self.0.set("filter", Node::Query(filter.into()));
        self
    }

    pub fn try_filter(&mut self, filter: impl Into<Element>) -> Result<&mut Self> {
        let filter = expect_query(filter.into())?;
        self.0.set("filter", Node::Query(filter));
        Ok(self)
    }
}

impl QueryBuilder for ConstantScoreQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<ConstantScoreQuery> for Query {
    fn from(query: ConstantScoreQuery) -> Self {
        query.0
    }
}

impl From<&mut ConstantScoreQuery> for Query {
    fn from(query: &mut ConstantScoreQuery) -> Self {
        query.0.clone()
    }
}
