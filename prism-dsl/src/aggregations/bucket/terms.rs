use crate::aggregations::builder::{field_base, AggregationBuilder};
use crate::aggregations::options::{BucketOrderOptions, FieldOption, MissingOption, ScriptOption};
use crate::base::Aggregation;
use serde_json::{json, Value};

/// One bucket per unique value of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsAggregation(Aggregation);

impl TermsAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self(field_base(name, "terms", Some(field.into())))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(field_base(name, "terms", None))
    }

    /// Number of top buckets to return.
    pub fn size(&mut self, size: u64) -> &mut Self {
        self.0.set("size", json!(size));
        self
    }

    pub fn shard_size(&mut self, size: u64) -> &mut Self {
        self.0.set("shard_size", json!(size));
        self
    }

    /// Regex string or exact value array of terms to keep.
    pub fn include(&mut self, include: impl Into<Value>) -> &mut Self {
        self.0.set("include", include.into());
        self
    }

    pub fn exclude(&mut self, exclude: impl Into<Value>) -> &mut Self {
        self.0.set("exclude", exclude.into());
        self
    }

    pub fn show_term_doc_count_error(&mut self, enabled: bool) -> &mut Self {
        self.0.set("show_term_doc_count_error", json!(enabled));
        self
    }
}

impl AggregationBuilder for TermsAggregation {
    fn aggregation(&self) -> &Aggregation {
        &self.0
    }

    fn aggregation_mut(&mut self) -> &mut Aggregation {
        &mut self.0
    }
}

impl FieldOption for TermsAggregation {}
impl ScriptOption for TermsAggregation {}
impl MissingOption for TermsAggregation {}
impl BucketOrderOptions for TermsAggregation {}

impl From<TermsAggregation> for Aggregation {
    fn from(agg: TermsAggregation) -> Self {
        agg.0
    }
}

impl From<&mut TermsAggregation> for Aggregation {
    fn from(agg: &mut TermsAggregation) -> Self {
        agg.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::metric::AvgAggregation;
    use crate::base::SortOrder;

    #[test]
    fn test_terms_ordered_by_sub_aggregation() {
        let mut genres = TermsAggregation::new("genres", "genre");
        genres
            .size(5)
            .order("avg_play_count", SortOrder::Desc)
            .agg(AvgAggregation::new("avg_play_count", "play_count"));

        assert_eq!(
            genres.to_json(),
            json!({
                "terms": {
                    "field": "genre",
                    "size": 5,
                    "order": {"avg_play_count": "desc"}
                },
                "aggs": {
                    "avg_play_count": {"avg": {"field": "play_count"}}
                }
            })
        );
    }

    #[test]
    fn test_include_exclude() {
        let mut tags = TermsAggregation::new("tags", "tags");
        tags.include(".*sport.*").exclude(json!(["water_sports"]));
        let doc = tags.to_json();
        assert_eq!(doc["terms"]["include"], json!(".*sport.*"));
        assert_eq!(doc["terms"]["exclude"], json!(["water_sports"]));
    }
}
