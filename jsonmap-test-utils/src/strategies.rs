//! Proptest strategies for decoded JSON nodes

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Scalar nodes: null, booleans, integers, finite floats and short strings
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        "[a-zA-Z0-9 _-]{0,16}".prop_map(Value::String),
    ]
}

/// Arbitrary nodes nested up to a few levels deep
pub fn any_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            btree_map(key(), inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Mapping keys
pub fn key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

/// Mappings of up to `max` entries
pub fn mapping(max: usize) -> impl Strategy<Value = Map<String, Value>> {
    btree_map(key(), any_value(), 0..=max).prop_map(|entries| entries.into_iter().collect())
}

/// Sequences of up to `max` elements
pub fn sequence(max: usize) -> impl Strategy<Value = Vec<Value>> {
    vec(any_value(), 0..=max)
}
