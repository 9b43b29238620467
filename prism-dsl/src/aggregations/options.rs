//! Option groups composed by aggregation leaves.
//!
//! Each trait contributes one vocabulary of options on top of
//! [`AggregationBuilder`]. A leaf opts in with an empty `impl` block, so a
//! leaf can take any combination of groups without an inheritance chain.

use super::builder::AggregationBuilder;
use crate::base::{expect_script, Element, Node, Script, SortOrder};
use crate::error::Result;
use serde_json::{json, Value};

pub trait FieldOption: AggregationBuilder {
    /// Field to run the aggregation on.
    fn field(&mut self, field: impl Into<String>) -> &mut Self {
        self.aggregation_mut()
            .set("field", Value::String(field.into()));
        self
    }
}

/// `field` and `script` may both be set; the engine decides how to combine
/// or reject them.
pub trait ScriptOption: AggregationBuilder {
    fn script(&mut self, script: impl Into<Script>) -> &mut Self {
        self.aggregation_mut()
            .set("script", Node::Script(script.into()));
        self
    }

    /// Runtime-checked variant of [`ScriptOption::script`]. On mismatch the
    /// body is left untouched.
    fn try_script(&mut self, script: impl Into<Element>) -> Result<&mut Self> {
        let script = expect_script(script.into())?;
        self.aggregation_mut().set("script", Node::Script(script));
        Ok(self)
    }
}

pub trait MissingOption: AggregationBuilder {
    /// Value used for documents that lack the field.
    fn missing(&mut self, value: impl Into<Value>) -> &mut Self {
        self.aggregation_mut().set("missing", value.into());
        self
    }
}

pub trait FormatOption: AggregationBuilder {
    /// Output format of the aggregated value or bucket keys.
    fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.aggregation_mut()
            .set("format", Value::String(format.into()));
        self
    }
}

pub trait TimeZoneOption: AggregationBuilder {
    /// Bucketing time zone: an ISO 8601 UTC offset (`-01:00`) or a TZ
    /// database id (`America/Los_Angeles`).
    fn time_zone(&mut self, tz: impl Into<String>) -> &mut Self {
        self.aggregation_mut()
            .set("time_zone", Value::String(tz.into()));
        self
    }
}

/// Ordering and sparsity of multi-bucket aggregations.
pub trait BucketOrderOptions: AggregationBuilder {
    /// Order buckets by `key` (`_key`, `_count`, or a sub-aggregation path).
    fn order(&mut self, key: &str, direction: SortOrder) -> &mut Self {
        self.aggregation_mut()
            .set("order", json!({ key: direction.as_str() }));
        self
    }

    fn min_doc_count(&mut self, count: u64) -> &mut Self {
        self.aggregation_mut().set("min_doc_count", json!(count));
        self
    }
}

/// Numeric bucket width of `histogram`. Date histograms take
/// `calendar_interval` or `fixed_interval` instead:
///
/// ```compile_fail
/// use prism_dsl::{DateHistogramAggregation, IntervalOption};
///
/// let mut by_day = DateHistogramAggregation::new("by_day", "date", "day");
/// by_day.interval(86_400_000);
/// ```
pub trait IntervalOption: AggregationBuilder {
    fn interval(&mut self, interval: impl Into<Value>) -> &mut Self {
        self.aggregation_mut().set("interval", interval.into());
        self
    }
}

/// Bucket layout shared by numeric and date histograms.
pub trait HistogramOptions: AggregationBuilder {
    /// Shift bucket boundaries by `offset`.
    fn offset(&mut self, offset: impl Into<Value>) -> &mut Self {
        self.aggregation_mut().set("offset", offset.into());
        self
    }

    /// Force buckets to exist across `[min, max]` even when empty.
    fn extended_bounds(&mut self, min: impl Into<Value>, max: impl Into<Value>) -> &mut Self {
        let (min, max) = (min.into(), max.into());
        self.aggregation_mut()
            .set("extended_bounds", json!({ "min": min, "max": max }));
        self
    }

    /// Limit buckets to `[min, max]`.
    fn hard_bounds(&mut self, min: impl Into<Value>, max: impl Into<Value>) -> &mut Self {
        let (min, max) = (min.into(), max.into());
        self.aggregation_mut()
            .set("hard_bounds", json!({ "min": min, "max": max }));
        self
    }

    /// Return buckets as a hash keyed by bucket key instead of an array.
    fn keyed(&mut self, keyed: bool) -> &mut Self {
        self.aggregation_mut().set("keyed", json!(keyed));
        self
    }
}

/// Target-bucket-count histogram shape (`auto_*` variants).
pub trait AutoHistogramOptions: AggregationBuilder {
    fn buckets(&mut self, buckets: u64) -> &mut Self {
        self.aggregation_mut().set("buckets", json!(buckets));
        self
    }

    /// Smallest rounding interval the engine may pick, e.g. `minute`.
    fn minimum_interval(&mut self, interval: impl Into<String>) -> &mut Self {
        self.aggregation_mut()
            .set("minimum_interval", Value::String(interval.into()));
        self
    }
}
