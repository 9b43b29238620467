use crate::base::{expect_aggregation, Aggregation, Element};
use crate::error::Result;
use crate::serialize::Serializer;
use serde_json::Value;

/// Access to the underlying [`Aggregation`] plus the options and nesting
/// operations every aggregation shares.
///
/// Leaf builders implement the two accessors; everything else is provided.
pub trait AggregationBuilder {
    fn aggregation(&self) -> &Aggregation;
    fn aggregation_mut(&mut self) -> &mut Aggregation;

    /// Name the parent (or the request) nests this aggregation under.
    fn name(&self) -> &str {
        self.aggregation().name()
    }

    /// Arbitrary metadata returned as-is alongside the aggregation result.
    fn meta(&mut self, meta: Value) -> &mut Self {
        self.aggregation_mut().set_meta(meta);
        self
    }

    /// Attach a sub-aggregation computed per bucket of this one.
    fn agg(&mut self, child: impl Into<Aggregation>) -> &mut Self {
        self.aggregation_mut().attach(child.into());
        self
    }

    fn aggs<I, A>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Aggregation>,
    {
        for child in children {
            self.aggregation_mut().attach(child.into());
        }
        self
    }

    /// Attach a dynamically typed sub-aggregation, rejecting anything that
    /// is not an aggregation node.
    fn try_agg(&mut self, child: impl Into<Element>) -> Result<&mut Self> {
        let child = expect_aggregation(child.into())?;
        self.aggregation_mut().attach(child);
        Ok(self)
    }

    fn remove_agg(&mut self, name: &str) -> Option<Aggregation> {
        self.aggregation_mut().detach(name)
    }

    fn sub_agg(&self, name: &str) -> Option<&Aggregation> {
        self.aggregation().child(name)
    }

    fn to_json(&self) -> Value {
        Serializer::default().aggregation(self.aggregation())
    }
}

impl AggregationBuilder for Aggregation {
    fn aggregation(&self) -> &Aggregation {
        self
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        self
    }
}

impl From<&mut Aggregation> for Aggregation {
    fn from(agg: &mut Aggregation) -> Self {
        agg.clone()
    }
}

/// Shared constructor of field-based aggregations: wire type plus the
/// optional shorthand field.
pub(crate) fn field_base(
    name: impl Into<String>,
    wire_type: &'static str,
    field: Option<String>,
) -> Aggregation {
    let mut agg = Aggregation::new(name, wire_type);
    if let Some(field) = field {
        agg.set("field", Value::String(field));
    }
    agg
}
