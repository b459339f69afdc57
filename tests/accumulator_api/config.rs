//! Configuration Tests
//!
//! Builder and JSON configuration through the facade.

use crate::*;

#[test]
fn test_from_json_builds_labeled_accumulator() {
    let acc = boostkit::helpers::from_json(
        r#"{"variant": "LogFormatter", "base_value": 1.5, "capacity": 2}"#,
    )
    .unwrap();
    assert_eq!(acc.variant(), &Variant::LogFormatter);
    assert_eq!(acc.process(1), Value::Float(2.5));
}

#[test]
fn test_from_json_bad_document() {
    let err = boostkit::helpers::from_json("{oops").unwrap_err();
    assert!(err.is_serialization());
}

#[test]
fn test_config_error_converts_to_facade_error() {
    let config = AccumulatorConfig {
        variant: Some(String::new()),
        ..Default::default()
    };
    let err: Error = config.build().unwrap_err().into();
    assert!(err.is_invalid_input());
}

#[test]
fn test_snapshot_json_shape() {
    let mut acc = json_helper("base");
    acc.add_data(json!({"k": true}));
    let json = serde_json::to_value(acc.snapshot()).unwrap();

    assert_eq!(json["variant"], "json_helper");
    assert_eq!(json["base_value"], json!({"String": "base"}));
}

#[test]
fn test_wrong_type_extraction() {
    let acc = math_complex("not a number");
    let err: Error = i64::try_from(acc.base_value().clone()).unwrap_err().into();
    assert!(err.is_wrong_type());
}
