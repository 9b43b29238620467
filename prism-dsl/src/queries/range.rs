use super::builder::QueryBuilder;
use crate::base::Query;
use serde_json::Value;

/// Documents whose field falls within the given bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery(Query);

impl RangeQuery {
    pub fn new(field: impl Into<String>) -> Self {
        Self(Query::field_keyed("range", field))
    }

    pub fn gte(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.set("gte", value.into());
        self
    }

    pub fn gt(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.set("gt", value.into());
        self
    }

    pub fn lte(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.set("lte", value.into());
        self
    }

    pub fn lt(&mut self, value: impl Into<Value>) -> &mut Self {
        self.0.set("lt", value.into());
        self
    }

    /// Date format used to parse the bounds.
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.0.set("format", Value::String(format.into()));
        self
    }

    pub fn time_zone(&mut self, tz: impl Into<String>) -> &mut Self {
        self.0.set("time_zone", Value::String(tz.into()));
        self
    }

    /// `INTERSECTS` (default), `CONTAINS` or `WITHIN`, for range fields.
    pub fn relation(&mut self, relation: impl Into<String>) -> &mut Self {
        self.0.set("relation", Value::String(relation.into()));
        self
    }
}

impl QueryBuilder for RangeQuery {
    fn query(&self) -> &Query {
        &self.0
    }

    fn query_mut(&mut self) -> &mut Query {
        &mut self.0
    }
}

impl From<RangeQuery> for Query {
    fn from(query: RangeQuery) -> Self {
        query.0
    }
}

impl From<&mut RangeQuery> for Query {
    fn from(query: &mut RangeQuery) -> Self {
        query.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_range() {
        let mut query = RangeQuery::new("timestamp");
        query.gte("now-1d/d").lt("now/d").time_zone("+01:00");

        assert_eq!(
            query.to_json(),
            json!({"range": {"timestamp": {
                "gte": "now-1d/d",
                "lt": "now/d",
                "time_zone": "+01:00"
            }}})
        );
    }
}
