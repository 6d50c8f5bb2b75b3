//! Keys and indices addressing a single accessor entry
//!
//! [`Locator`] lets one lookup method accept either a string key (for keyed
//! accessors) or an integer index (for indexed accessors). Integer locators
//! are signed so that negative indices are representable and rejected by the
//! bounds check instead of wrapping.

use crate::error::{MappingError, Result};
use crate::kind::ContainerKind;
use serde_json::{Map, Value};
use std::fmt;

/// Where a lookup was aimed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Mapping key
    Key(String),
    /// Sequence index (may be negative when the caller passed one)
    Index(i64),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Key(key) => write!(f, "key '{}'", key),
            Location::Index(index) => write!(f, "index {}", index),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A key or index that resolves to one entry of an accessor
///
/// Implemented for string keys (`&str`, `String`, `&String`) and integer
/// indices (`usize`, `isize`, `i32`, `i64`). The trait is sealed.
pub trait Locator: sealed::Sealed {
    /// Container kind this locator addresses
    const KIND: ContainerKind;

    /// Owned description of this locator for diagnostics
    fn location(&self) -> Location;

    /// Resolve against a mapping; index locators fail with
    /// [`MappingError::WrongContainerKind`]
    fn in_map<'v>(&self, map: &'v Map<String, Value>) -> Result<&'v Value>;

    /// Resolve against a sequence, checking bounds before indexing
    fn in_slice<'v>(&self, items: &'v [Value]) -> Result<&'v Value>;
}

fn lookup_key<'v>(map: &'v Map<String, Value>, key: &str) -> Result<&'v Value> {
    map.get(key).ok_or_else(|| MappingError::KeyNotFound {
        key: key.to_string(),
    })
}

fn lookup_index(items: &[Value], index: i64) -> Result<&Value> {
    // `usize::try_from` rejects negatives; `get` rejects index >= len.
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .ok_or(MappingError::IndexOutOfBounds {
            index,
            len: items.len(),
        })
}

/// Error for a locator applied to the container kind it does not address
fn wrong_container<L: Locator>() -> MappingError {
    let found = match L::KIND {
        ContainerKind::Keyed => ContainerKind::Indexed,
        ContainerKind::Indexed => ContainerKind::Keyed,
    };
    MappingError::WrongContainerKind {
        expected: L::KIND,
        found,
    }
}

macro_rules! key_locator {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Locator for $ty {
            const KIND: ContainerKind = ContainerKind::Keyed;

            fn location(&self) -> Location {
                Location::Key(self.to_string())
            }

            fn in_map<'v>(&self, map: &'v Map<String, Value>) -> Result<&'v Value> {
                lookup_key(map, self)
            }

            fn in_slice<'v>(&self, _items: &'v [Value]) -> Result<&'v Value> {
                Err(wrong_container::<Self>())
            }
        }
    )*};
}

macro_rules! index_locator {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Locator for $ty {
            const KIND: ContainerKind = ContainerKind::Indexed;

            fn location(&self) -> Location {
                Location::Index(saturating_index(*self))
            }

            fn in_map<'v>(&self, _map: &'v Map<String, Value>) -> Result<&'v Value> {
                Err(wrong_container::<Self>())
            }

            fn in_slice<'v>(&self, items: &'v [Value]) -> Result<&'v Value> {
                lookup_index(items, saturating_index(*self))
            }
        }
    )*};
}

/// Widen an integer index to `i64`; values beyond `i64::MAX` are out of
/// bounds for any sequence anyway.
fn saturating_index<T: TryInto<i64>>(index: T) -> i64 {
    index.try_into().unwrap_or(i64::MAX)
}

key_locator!(String, &str, &String);
index_locator!(usize, isize, i32, i64);
