use super::{push_value, Body, BodyValue};
use std::borrow::Cow;

/// Family base for every query builder.
///
/// Field-keyed queries (`term`, `match`, `range`) nest their body under the
/// field name: `{ "term": { "user": { "value": "kimchy" } } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    wire_type: Cow<'static, str>,
    field: Option<String>,
    body: Body,
}

impl Query {
    pub fn new(wire_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            wire_type: wire_type.into(),
            field: None,
            body: Body::new(),
        }
    }

    pub fn field_keyed(wire_type: impl Into<Cow<'static, str>>, field: impl Into<String>) -> Self {
        Self {
            wire_type: wire_type.into(),
            field: Some(field.into()),
            body: Body::new(),
        }
    }

    pub fn wire_type(&self) -> &str {
        &self.wire_type
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
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

    /// Append to a clause list such as `must` or `should`.
    pub fn push(&mut self, key: &str, value: impl Into<BodyValue>) -> &mut Self {
        push_value(&mut self.body, key, value.into());
        self
    }
}
