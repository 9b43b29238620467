//! Aggregation trees: construction, nesting and serialization.

use prism_dsl::{
    AggregationBuilder, AutoDateHistogramAggregation, Element, Error, Family, FieldOption,
    MissingOption, Script, ScriptOption, Serializer, SumAggregation, TermsAggregation,
    TimeZoneOption,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sales_over_time() -> AutoDateHistogramAggregation {
    let mut agg = AutoDateHistogramAggregation::new("sales_over_time", "date", 15);
    agg.time_zone("-01:00");
    agg
}

#[test]
fn test_sum_scenario() {
    let agg = SumAggregation::new("hat_prices", "price");
    assert_eq!(agg.to_json(), json!({"sum": {"field": "price"}}));
}

#[test]
fn test_auto_date_histogram_scenario() {
    assert_eq!(
        sales_over_time().to_json(),
        json!({"auto_date_histogram": {
            "field": "date",
            "buckets": 15,
            "time_zone": "-01:00"
        }})
    );
}

#[test]
fn test_nested_sum_scenario() {
    init_tracing();

    let mut histogram = sales_over_time();
    histogram.agg(SumAggregation::new("total_sales", "price"));

    assert_eq!(
        histogram.to_json(),
        json!({
            "auto_date_histogram": {"field": "date", "buckets": 15, "time_zone": "-01:00"},
            "aggs": {"total_sales": {"sum": {"field": "price"}}}
        })
    );
}

#[test]
fn test_child_section_equals_child_serialization() {
    let mut child = SumAggregation::new("x", "price");
    child.missing(0).script(Script::inline("_value * 2"));
    let expected = child.to_json();

    let mut parent = TermsAggregation::new("by_color", "color");
    parent.agg(&mut child);

    assert_eq!(parent.to_json()["aggs"]["x"], expected);
}

#[test]
fn test_deep_nesting() {
    let mut leaf = SumAggregation::new("revenue", "price");
    leaf.missing(0);

    let mut middle = TermsAggregation::new("by_product", "product");
    middle.agg(leaf);

    let mut top = sales_over_time();
    top.agg(middle);

    let doc = top.to_json();
    assert_eq!(
        doc["aggs"]["by_product"]["aggs"]["revenue"],
        json!({"sum": {"field": "price", "missing": 0}})
    );
}

#[test]
fn test_reattach_same_name_last_write_wins() {
    let mut parent = sales_over_time();
    parent
        .agg(SumAggregation::new("total", "price"))
        .agg(SumAggregation::new("total", "cost"));

    assert_eq!(parent.aggregation().children().len(), 1);
    assert_eq!(
        parent.to_json()["aggs"]["total"],
        json!({"sum": {"field": "cost"}})
    );
}

#[test]
fn test_detach_missing_name_is_noop() {
    let mut parent = sales_over_time();
    parent.agg(SumAggregation::new("total_sales", "price"));
    let before = Serializer::default()
        .to_string(parent.aggregation())
        .unwrap();

    assert!(parent.remove_agg("does_not_exist").is_none());
    assert!(parent.remove_agg("does_not_exist").is_none());

    let after = Serializer::default()
        .to_string(parent.aggregation())
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_detach_then_serialize_drops_aggs_key() {
    let mut parent = sales_over_time();
    parent.agg(SumAggregation::new("total_sales", "price"));

    let removed = parent.remove_agg("total_sales");
    assert_eq!(
        removed.map(|a| a.name().to_string()),
        Some("total_sales".to_string())
    );
    assert!(parent.to_json().get("aggs").is_none());
}

#[test]
fn test_try_script_rejects_plain_string() {
    let mut agg = SumAggregation::new("hat_prices", "price");
    agg.missing(1);
    let before = agg.to_json();

    let err = agg.try_script("doc.price.value").unwrap_err();
    match err {
        Error::TypeMismatch { expected, actual } => {
            assert_eq!(expected, Family::Script);
            assert_eq!(actual, "string");
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
    assert_eq!(agg.to_json(), before);

    // still usable after a failed call
    agg.field("list_price");
    assert_eq!(agg.to_json()["sum"]["field"], json!("list_price"));
}

#[test]
fn test_try_script_accepts_stored_script() {
    let mut agg = SumAggregation::named("hat_prices");
    let mut script = Script::stored("price_calc");
    script.param("factor", 2);
    agg.try_script(script).unwrap();

    assert_eq!(
        agg.to_json(),
        json!({"sum": {"script": {"id": "price_calc", "params": {"factor": 2}}}})
    );
}

#[test]
fn test_try_agg_rejects_script_node() {
    let mut parent = sales_over_time();
    let err = parent
        .try_agg(Element::from(Script::inline("1")))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: Family::Aggregation,
            ..
        }
    ));
    assert!(parent.aggregation().children().is_empty());
}

#[test]
fn test_meta_is_sibling_of_body() {
    let mut agg = SumAggregation::new("hat_prices", "price");
    agg.meta(json!({"color": "blue"}));
    assert_eq!(
        agg.to_json(),
        json!({"sum": {"field": "price"}, "meta": {"color": "blue"}})
    );
}

#[test]
fn test_serialization_is_idempotent() {
    let mut parent = sales_over_time();
    parent.agg(SumAggregation::new("total_sales", "price"));

    let serializer = Serializer::default();
    let first = serializer.to_string(parent.aggregation()).unwrap();
    let second = serializer.to_string(parent.aggregation()).unwrap();
    assert_eq!(first, second);
}
