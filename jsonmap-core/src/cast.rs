//! Direct casts from decoded nodes to Rust types

use crate::kind::ValueKind;
use serde_json::{Map, Value};

/// Types a node can be cast to without a transform
///
/// A cast succeeds only when the node's dynamic type is the one the target
/// expects; no coercion happens between strings, numbers and booleans.
pub trait FromValue: Sized {
    /// Description of the nodes this cast accepts, reported on mismatch
    const EXPECTED: &'static str;

    /// Attempt the cast
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const EXPECTED: &'static str = ValueKind::String.name();

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = ValueKind::Bool.name();

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

// Integers accept only integral numbers that fit the target exactly.
macro_rules! signed_cast {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            const EXPECTED: &'static str = ValueKind::Number.name();

            fn from_value(value: &Value) -> Option<Self> {
                value.as_i64().and_then(|n| <$ty>::try_from(n).ok())
            }
        }
    )*};
}

macro_rules! unsigned_cast {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            const EXPECTED: &'static str = ValueKind::Number.name();

            fn from_value(value: &Value) -> Option<Self> {
                value.as_u64().and_then(|n| <$ty>::try_from(n).ok())
            }
        }
    )*};
}

signed_cast!(i8, i16, i32, i64, isize);
unsigned_cast!(u8, u16, u32, u64, usize);

impl FromValue for f64 {
    const EXPECTED: &'static str = ValueKind::Number.name();

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = ValueKind::Number.name();

    /// Numbers beyond the `f32` range do not fit and are rejected.
    fn from_value(value: &Value) -> Option<Self> {
        let narrowed = value.as_f64()? as f32;
        narrowed.is_finite().then_some(narrowed)
    }
}

impl FromValue for Map<String, Value> {
    const EXPECTED: &'static str = ValueKind::Object.name();

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromValue for Vec<Value> {
    const EXPECTED: &'static str = ValueKind::Array.name();

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

/// Any node casts to `Value`, so a mismatch is never reported for it.
impl FromValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}
