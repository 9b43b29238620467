//! Tests for serializer configuration

use prism_dsl::{
    AggregationBuilder, AggsKey, DslConfig, Serializer, SumAggregation, TermsAggregation,
};
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = DslConfig::default();
    assert_eq!(config.serialize.aggs_key, AggsKey::Aggs);
    assert!(!config.serialize.pretty);
}

#[test]
fn test_save_and_load() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("nested/dsl.toml");

    let mut config = DslConfig::default();
    config.serialize.aggs_key = AggsKey::Aggregations;
    config.serialize.pretty = true;
    config.save(&config_path).unwrap();

    let loaded = DslConfig::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_fails() {
    let temp = tempdir().unwrap();
    assert!(DslConfig::load_from(&temp.path().join("absent.toml")).is_err());
}

#[test]
fn test_loaded_config_drives_serializer() {
    let config = DslConfig::from_toml_str(
        r#"
[serialize]
aggs_key = "aggregations"
"#,
    )
    .unwrap();

    let mut colors = TermsAggregation::new("colors", "color");
    colors.agg(SumAggregation::new("revenue", "price"));

    let doc = Serializer::new(config.serialize).to_value(colors.aggregation());
    assert!(doc.get("aggregations").is_some());
    assert!(doc.get("aggs").is_none());
}
