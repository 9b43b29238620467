//! Fluent builders for Elasticsearch-style request bodies
//!
//! Builders form a tree of queries, aggregations and scripts that the
//! [`Serializer`] turns into the engine's wire-format JSON.
//!
//! ```
//! use prism_dsl::{AggregationBuilder, AutoDateHistogramAggregation, SumAggregation, TimeZoneOption};
//! use serde_json::json;
//!
//! let mut sales = AutoDateHistogramAggregation::new("sales_over_time", "date", 15);
//! sales
//!     .time_zone("-01:00")
//!     .agg(SumAggregation::new("total_sales", "price"));
//!
//! assert_eq!(
//!     sales.to_json(),
//!     json!({
//!         "auto_date_histogram": {"field": "date", "buckets": 15, "time_zone": "-01:00"},
//!         "aggs": {"total_sales": {"sum": {"field": "price"}}}
//!     })
//! );
//! ```
//!
//! Setters mutate the builder in place and return `&mut Self`. Setters taking
//! a structured argument come in two forms: a typed one checked at compile
//! time (`script(Script)`) and a `try_*` one that checks an [`Element`] at
//! runtime and returns [`Error::TypeMismatch`] on the wrong family.

pub mod aggregations;
pub mod base;
pub mod config;
pub mod dsl;
pub mod error;
pub mod queries;
pub mod request;
pub mod serialize;

pub use aggregations::*;
pub use base::{check_type, Aggregation, BodyValue, Element, Family, Node, Query, Script, SortOrder};
pub use config::{AggsKey, DslConfig, SerializeConfig};
pub use error::{Error, Result};
pub use queries::*;
pub use request::SearchRequest;
pub use serialize::{Document, Serializer};
