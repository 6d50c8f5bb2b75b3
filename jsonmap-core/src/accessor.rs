//! Typed access into a decoded mapping or sequence

use crate::cast::FromValue;
use crate::error::{MappingError, Result};
use crate::kind::{ContainerKind, ValueKind};
use crate::locator::Locator;
use crate::transform::Transform;
use serde_json::{Map, Value};
use tracing::trace;

/// Read-only view over exactly one decoded container
///
/// Keyed accessors are addressed with string keys, indexed accessors with
/// integer indices. Using the other kind of locator fails with
/// [`MappingError::WrongContainerKind`].
///
/// ```
/// use jsonmap_core::Accessor;
/// use serde_json::json;
///
/// let person = Accessor::try_from(json!({"name": "Ada", "born": 1815})).unwrap();
/// let name: String = person.value("name").unwrap();
/// assert_eq!(name, "Ada");
/// assert!(person.value::<i64, _>("missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    /// String-keyed mapping
    Keyed(Map<String, Value>),
    /// Ordered sequence
    Indexed(Vec<Value>),
}

impl Accessor {
    /// Wrap a mapping
    pub fn keyed(map: Map<String, Value>) -> Self {
        Accessor::Keyed(map)
    }

    /// Wrap a sequence
    pub fn indexed(items: Vec<Value>) -> Self {
        Accessor::Indexed(items)
    }

    /// Which container this accessor holds
    pub fn kind(&self) -> ContainerKind {
        match self {
            Accessor::Keyed(_) => ContainerKind::Keyed,
            Accessor::Indexed(_) => ContainerKind::Indexed,
        }
    }

    /// Number of entries in the container
    pub fn count(&self) -> usize {
        match self {
            Accessor::Keyed(map) => map.len(),
            Accessor::Indexed(items) => items.len(),
        }
    }

    /// True when the container has no entries
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Borrow the mapping, if keyed
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Accessor::Keyed(map) => Some(map),
            Accessor::Indexed(_) => None,
        }
    }

    /// Borrow the sequence, if indexed
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Accessor::Keyed(_) => None,
            Accessor::Indexed(items) => Some(items),
        }
    }

    /// Keys of a keyed accessor, in document order; empty for indexed ones
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_map()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Raw entries (values of a mapping, elements of a sequence)
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Accessor::Keyed(map) => Box::new(map.values()),
            Accessor::Indexed(items) => Box::new(items.iter()),
        }
    }

    /// Unwrap back into a JSON node
    pub fn into_inner(self) -> Value {
        match self {
            Accessor::Keyed(map) => Value::Object(map),
            Accessor::Indexed(items) => Value::Array(items),
        }
    }

    /// Locate an entry without casting it
    pub fn raw<L: Locator>(&self, locator: L) -> Result<&Value> {
        self.locate(&locator)
    }

    /// Locate an entry and cast it to `T`
    ///
    /// Fails when the locator addresses the other container kind, the entry
    /// does not exist, or the entry's dynamic type is not `T`.
    pub fn value<T: FromValue, L: Locator>(&self, locator: L) -> Result<T> {
        let raw = self.locate(&locator)?;
        cast(raw, &locator)
    }

    /// Locate an entry and convert it with `transform`
    ///
    /// Fails when the locator addresses the other container kind, the entry
    /// does not exist, or the transform rejects the entry.
    pub fn value_with<X: Transform, L: Locator>(
        &self,
        locator: L,
        transform: X,
    ) -> Result<X::Output> {
        let raw = self.locate(&locator)?;
        convert(raw, &locator, &transform)
    }

    /// Like [`value`](Self::value), but a missing entry or a JSON `null`
    /// yields `Ok(None)`
    ///
    /// Wrong container kinds and type mismatches still fail. Absent entries
    /// are an expected outcome here and are not logged.
    pub fn optional<T: FromValue, L: Locator>(&self, locator: L) -> Result<Option<T>> {
        self.present(&locator)?
            .map(|raw| cast(raw, &locator))
            .transpose()
    }

    /// Like [`value_with`](Self::value_with), but a missing entry or a JSON
    /// `null` yields `Ok(None)`
    pub fn optional_with<X: Transform, L: Locator>(
        &self,
        locator: L,
        transform: X,
    ) -> Result<Option<X::Output>> {
        self.present(&locator)?
            .map(|raw| convert(raw, &locator, &transform))
            .transpose()
    }

    fn resolve<L: Locator>(&self, locator: &L) -> Result<&Value> {
        match self {
            Accessor::Keyed(map) => locator.in_map(map),
            Accessor::Indexed(items) => locator.in_slice(items),
        }
    }

    fn locate<L: Locator>(&self, locator: &L) -> Result<&Value> {
        self.resolve(locator).map_err(|err| report(locator, err))
    }

    fn present<L: Locator>(&self, locator: &L) -> Result<Option<&Value>> {
        match self.resolve(locator) {
            Ok(Value::Null) => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.is_absent() => Ok(None),
            Err(err) => Err(report(locator, err)),
        }
    }
}

fn cast<T: FromValue, L: Locator>(raw: &Value, locator: &L) -> Result<T> {
    T::from_value(raw).ok_or_else(|| {
        let err = MappingError::TypeMismatch {
            location: locator.location(),
            expected: T::EXPECTED,
            found: ValueKind::of(raw),
        };
        report(locator, err)
    })
}

fn convert<X: Transform, L: Locator>(
    raw: &Value,
    locator: &L,
    transform: &X,
) -> Result<X::Output> {
    transform.apply(raw).ok_or_else(|| {
        let err = MappingError::TransformRejected {
            location: locator.location(),
            found: ValueKind::of(raw),
        };
        report(locator, err)
    })
}

fn report<L: Locator>(locator: &L, err: MappingError) -> MappingError {
    trace!(
        target: "jsonmap::accessor",
        location = %locator.location(),
        reason = %err,
        "lookup failed"
    );
    err
}

impl From<Map<String, Value>> for Accessor {
    fn from(map: Map<String, Value>) -> Self {
        Accessor::Keyed(map)
    }
}

impl From<Vec<Value>> for Accessor {
    fn from(items: Vec<Value>) -> Self {
        Accessor::Indexed(items)
    }
}

impl TryFrom<Value> for Accessor {
    type Error = MappingError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Accessor::Keyed(map)),
            Value::Array(items) => Ok(Accessor::Indexed(items)),
            other => Err(MappingError::NotAContainer {
                found: ValueKind::of(&other),
            }),
        }
    }
}

/// Nested objects and arrays cast to accessors for further lookups.
impl FromValue for Accessor {
    const EXPECTED: &'static str = "object or array";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Accessor::Keyed(map.clone())),
            Value::Array(items) => Some(Accessor::Indexed(items.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Location;
    use crate::transform::UrlTransform;
    use serde_json::json;

    fn person() -> Accessor {
        Accessor::try_from(json!({
            "name": "Ada",
            "born": 1815,
            "active": false,
            "spouse": null,
            "tags": ["math", "poetry"]
        }))
        .unwrap()
    }

    fn letters() -> Accessor {
        Accessor::try_from(json!(["a", "b", "c"])).unwrap()
    }

    #[test]
    fn test_count() {
        assert_eq!(person().count(), 5);
        assert_eq!(letters().count(), 3);
        assert_eq!(Accessor::keyed(Map::new()).count(), 0);
        assert!(Accessor::indexed(Vec::new()).is_empty());
    }

    #[test]
    fn test_kind() {
        assert_eq!(person().kind(), ContainerKind::Keyed);
        assert_eq!(letters().kind(), ContainerKind::Indexed);
    }

    #[test]
    fn test_keyed_value() {
        let person = person();
        assert_eq!(person.value::<String, _>("name").unwrap(), "Ada");
        assert_eq!(person.value::<i64, _>("born").unwrap(), 1815);
        assert!(!person.value::<bool, _>("active").unwrap());
    }

    #[test]
    fn test_keyed_missing_and_mismatch() {
        let person = person();
        assert_eq!(
            person.value::<String, _>("missing"),
            Err(MappingError::KeyNotFound {
                key: "missing".to_string()
            })
        );
        assert_eq!(
            person.value::<i64, _>("name"),
            Err(MappingError::TypeMismatch {
                location: Location::Key("name".to_string()),
                expected: "number",
                found: ValueKind::String,
            })
        );
    }

    #[test]
    fn test_indexed_value() {
        let letters = letters();
        assert_eq!(letters.value::<String, _>(1).unwrap(), "b");
        assert_eq!(letters.value::<String, _>(0usize).unwrap(), "a");
        assert_eq!(
            letters.value::<String, _>(3),
            Err(MappingError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            letters.value::<String, _>(-1),
            Err(MappingError::IndexOutOfBounds { index: -1, len: 3 })
        );
    }

    #[test]
    fn test_wrong_container_kind() {
        assert_eq!(
            person().value::<String, _>(0),
            Err(MappingError::WrongContainerKind {
                expected: ContainerKind::Indexed,
                found: ContainerKind::Keyed,
            })
        );
        assert_eq!(
            letters().value::<String, _>("0"),
            Err(MappingError::WrongContainerKind {
                expected: ContainerKind::Keyed,
                found: ContainerKind::Indexed,
            })
        );
    }

    #[test]
    fn test_value_with_transform() {
        struct Length;

        impl Transform for Length {
            type Output = usize;

            fn apply(&self, input: &Value) -> Option<usize> {
                input.as_str().map(str::len)
            }
        }

        let person = person();
        assert_eq!(person.value_with("name", Length).unwrap(), 3);
        assert_eq!(
            person.value_with("born", Length),
            Err(MappingError::TransformRejected {
                location: Location::Key("born".to_string()),
                found: ValueKind::Number,
            })
        );
        assert!(matches!(
            person.value_with("missing", Length),
            Err(MappingError::KeyNotFound { .. })
        ));
        assert_eq!(letters().value_with(2, &Length).unwrap(), 1);
    }

    #[test]
    fn test_optional_lookups() {
        let person = person();
        assert_eq!(
            person.optional::<String, _>("name").unwrap(),
            Some("Ada".to_string())
        );
        assert_eq!(person.optional::<String, _>("spouse").unwrap(), None);
        assert_eq!(person.optional::<String, _>("missing").unwrap(), None);
        assert!(person.optional::<String, _>("born").is_err());
        assert!(person.optional::<String, _>(0).is_err());
        assert_eq!(letters().optional::<String, _>(7).unwrap(), None);
    }

    #[test]
    fn test_optional_keeps_hard_failures() {
        let person = person();
        assert_eq!(person.optional_with("missing", UrlTransform::new()).unwrap(), None);
        assert_eq!(person.optional_with("spouse", UrlTransform::new()).unwrap(), None);
        assert_eq!(
            person.optional_with("born", UrlTransform::new()),
            Err(MappingError::TransformRejected {
                location: Location::Key("born".to_string()),
                found: ValueKind::Number,
            })
        );
        assert_eq!(
            letters().optional::<String, _>("a"),
            Err(MappingError::WrongContainerKind {
                expected: ContainerKind::Keyed,
                found: ContainerKind::Indexed,
            })
        );
    }

    #[test]
    fn test_nested_accessor() {
        let tags: Accessor = person().value("tags").unwrap();
        assert_eq!(tags.kind(), ContainerKind::Indexed);
        assert_eq!(tags.value::<String, _>(1).unwrap(), "poetry");
        assert_eq!(
            person().value::<Accessor, _>("name"),
            Err(MappingError::TypeMismatch {
                location: Location::Key("name".to_string()),
                expected: "object or array",
                found: ValueKind::String,
            })
        );
    }

    #[test]
    fn test_try_from_rejects_scalars() {
        assert_eq!(
            Accessor::try_from(json!("text")),
            Err(MappingError::NotAContainer {
                found: ValueKind::String
            })
        );
        assert!(Accessor::try_from(json!(null)).is_err());
    }

    #[test]
    fn test_keys_and_iter() {
        let person = person();
        let mut keys: Vec<&str> = person.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["active", "born", "name", "spouse", "tags"]);
        assert_eq!(letters().keys().count(), 0);
        assert_eq!(letters().iter().count(), 3);
    }

    #[test]
    fn test_into_inner() {
        let value = json!([1, 2]);
        assert_eq!(Accessor::try_from(value.clone()).unwrap().into_inner(), value);
    }
}
