//! Log Operation Tests
//!
//! Tests for add_data, extend_data and clear.

use crate::*;

#[test]
fn test_add_data_counts_from_one() {
    let mut acc = vector_math(10);
    assert_eq!(acc.add_data("item1"), 1);
    assert_eq!(acc.data()[0], Value::from("item1"));
}

#[test]
fn test_heterogeneous_items_keep_order() {
    let mut acc = Accumulator::default();
    acc.add_data(1);
    acc.add_data("two");
    acc.add_data(Value::Array(vec![Value::Int(3)]));
    acc.add_data(Value::Null);

    assert_eq!(
        acc.data(),
        &[
            Value::Int(1),
            Value::from("two"),
            Value::Array(vec![Value::Int(3)]),
            Value::Null,
        ]
    );
}

#[test]
fn test_clear_then_reuse() {
    let mut acc = file_io(0);
    acc.extend_data(["a", "b", "c"]);
    assert!(acc.clear());
    assert_eq!(acc.len(), 0);
    assert!(acc.clear());
    assert_eq!(acc.add_data("d"), 1);
}

#[test]
fn test_base_value_survives_log_mutation() {
    let mut acc = log_formatter(5);
    acc.add_data(1);
    acc.clear();
    assert_eq!(acc.base_value(), &Value::Int(5));
    assert_eq!(acc.process(1), Value::Int(6));
}

// =============================================================================
// PROPERTIES
// =============================================================================

mod properties {
    use crate::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_len_tracks_adds_since_clear(
            before in proptest::collection::vec("[a-z]{1,4}", 0..16),
            after in proptest::collection::vec(any::<i32>(), 0..16),
        ) {
            let mut acc = json_helper(0);
            acc.extend_data(before.iter().map(String::as_str));
            prop_assert!(acc.clear());
            for (i, item) in after.iter().enumerate() {
                prop_assert_eq!(acc.add_data(*item), i + 1);
            }
            prop_assert_eq!(acc.len(), after.len());
        }
    }
}
