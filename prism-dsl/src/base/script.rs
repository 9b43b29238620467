use super::{insert_entry, Body, BodyValue};
use serde_json::Value;

/// Script family node.
///
/// Scripts have no wire wrapper: wherever one is embedded (an aggregation's
/// `script` option, a script query) the body is emitted directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    body: Body,
}

impl Script {
    /// Inline script: `{ "source": ... }`
    pub fn inline(source: impl Into<String>) -> Self {
        let mut body = Body::new();
        body.insert("source".to_string(), Value::String(source.into()).into());
        Self { body }
    }

    /// Stored script referenced by id: `{ "id": ... }`
    pub fn stored(id: impl Into<String>) -> Self {
        let mut body = Body::new();
        body.insert("id".to_string(), Value::String(id.into()).into());
        Self { body }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Script language, e.g. `painless` or `expression`.
    pub fn lang(&mut self, lang: impl Into<String>) -> &mut Self {
        self.body
            .insert("lang".to_string(), Value::String(lang.into()).into());
        self
    }

    /// Replace all script parameters.
    pub fn params(&mut self, params: Value) -> &mut Self {
        self.body.insert("params".to_string(), params.into());
        self
    }

    /// Set a single script parameter.
    pub fn param(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        if let Some(BodyValue::Scalar(Value::Object(existing))) = self.body.get_mut("params") {
            let entries = std::mem::take(existing)
                .into_iter()
                .map(|(k, v)| (k, BodyValue::Scalar(v)))
                .collect();
            self.body
                .insert("params".to_string(), BodyValue::Map(entries));
        }
        insert_entry(
            &mut self.body,
            "params",
            key,
            BodyValue::Scalar(value.into()),
        );
        self
    }
}

impl From<&mut Script> for Script {
    fn from(script: &mut Script) -> Self {
        script.clone()
    }
}
