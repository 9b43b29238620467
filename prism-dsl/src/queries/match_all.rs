use super::builder::QueryBuilder;
use crate::base::Query;

/// Matches every document, giving each a score of `1.0` (or `boost`).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAllQuery(Query);

impl MatchAllQuery {
    pub fn new() -> Self {
        Self(Query::new("match_all"))
    }
}

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for MatchAllQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<MatchAllQuery> for Query {
    fn from(query: MatchAllQuery) -> Self {
        query.0
    }
}

impl From<&mut MatchAllQuery> for Query {
    fn from(query: &mut MatchAllQuery) -> Self {
        query.0.clone()
    }
}
