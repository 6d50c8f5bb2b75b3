//! Enum resolution from raw values

use super::Transform;
use crate::cast::FromValue;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A type whose values are identified by a primitive raw value
///
/// Typically a fieldless enum whose cases map one-to-one onto strings or
/// integers found in documents.
///
/// ```
/// use jsonmap_core::RawRepresentable;
///
/// #[derive(Debug, PartialEq)]
/// enum Heading {
///     North,
///     South,
/// }
///
/// impl RawRepresentable for Heading {
///     type Raw = i64;
///
///     fn from_raw(raw: i64) -> Option<Self> {
///         match raw {
///             0 => Some(Heading::North),
///             1 => Some(Heading::South),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> i64 {
///         match self {
///             Heading::North => 0,
///             Heading::South => 1,
///         }
///     }
/// }
///
/// assert_eq!(Heading::from_raw(1), Some(Heading::South));
/// assert_eq!(Heading::from_raw(2), None);
/// ```
pub trait RawRepresentable: Sized {
    /// Primitive backing each case
    type Raw: FromValue;

    /// Resolve a raw value; unknown values must return `None`
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// Raw value of this case
    fn raw_value(&self) -> Self::Raw;
}

/// Resolves nodes into `R` through its raw value
///
/// The node must cast to `R::Raw` and name a defined case; there is no
/// fallback case.
pub struct EnumTransform<R> {
    _marker: PhantomData<fn() -> R>,
}

impl<R> EnumTransform<R> {
    /// Create the transform
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<R> Default for EnumTransform<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for EnumTransform<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for EnumTransform<R> {}

impl<R> fmt::Debug for EnumTransform<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumTransform")
            .field("target", &std::any::type_name::<R>())
            .finish()
    }
}

impl<R: RawRepresentable> Transform for EnumTransform<R> {
    type Output = R;

    fn apply(&self, input: &Value) -> Option<R> {
        <R::Raw as FromValue>::from_value(input).and_then(R::from_raw)
    }
}
