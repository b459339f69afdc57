//! Process Tests
//!
//! Sum for numeric pairs, concatenation otherwise, null policy.

use crate::*;

// =============================================================================
// NUMERIC
// =============================================================================

#[test]
fn test_every_helper_adds_numbers() {
    init_logging();
    for acc in all_helpers(10) {
        assert_eq!(acc.process(5), Value::Int(15), "label {}", acc.label());
    }
}

#[test]
fn test_int_and_float_mix() {
    let acc = math_complex(10);
    assert_eq!(acc.process(0.5), Value::Float(10.5));
}

#[test]
fn test_int_overflow_widens() {
    let acc = vector_math(i64::MAX);
    assert_eq!(acc.process(1), Value::Float(i64::MAX as f64 + 1.0));
}

// =============================================================================
// CONCATENATION
// =============================================================================

#[test]
fn test_every_helper_concatenates_text() {
    for acc in all_helpers(10) {
        assert_eq!(acc.process("test"), Value::from("10test"), "label {}", acc.label());
    }
}

#[test]
fn test_text_base_with_number() {
    let acc = log_formatter("[INFO] ");
    assert_eq!(acc.process(42), Value::from("[INFO] 42"));
}

#[test]
fn test_structured_input_renders_as_text() {
    let acc = json_helper("payload=");
    let input = Value::from(json!({"id": 1, "tags": ["a"]}));
    assert_eq!(acc.process(input), Value::from(r#"payload={"id": 1, "tags": ["a"]}"#));
}

// =============================================================================
// NULL POLICY
// =============================================================================

#[test]
fn test_null_returns_base_for_every_helper() {
    for acc in all_helpers(0) {
        assert_eq!(acc.process(Value::Null), Value::Int(0));
    }
}

#[test]
fn test_none_option_is_null() {
    let acc = file_io(7);
    assert_eq!(acc.process(Option::<i64>::None), Value::Int(7));
}

#[test]
fn test_concatenate_policy_renders_null() {
    let acc = AccumulatorBuilder::new()
        .null_policy(NullPolicy::Concatenate)
        .build();
    assert_eq!(acc.process(Value::Null), Value::from("0null"));
}

// =============================================================================
// PURITY
// =============================================================================

#[test]
fn test_process_leaves_state_unchanged() {
    let mut acc = json_helper(3);
    acc.add_data("a");
    let before = acc.snapshot();

    let _ = acc.process_all(vec![Value::Int(1), Value::from("x"), Value::Null]);

    assert_eq!(acc.snapshot(), before);
}
