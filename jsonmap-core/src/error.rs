//! Error types for jsonmap lookups

use crate::kind::{ContainerKind, ValueKind};
use crate::locator::Location;
use thiserror::Error;

/// Lookup and conversion failures
///
/// Every variant is recoverable: callers usually treat a failed field as
/// absent or malformed and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Key lookup on an indexed accessor, or index lookup on a keyed one.
    #[error("Wrong container kind: expected {expected} accessor, found {found}")]
    WrongContainerKind {
        /// Container kind the locator addresses
        expected: ContainerKind,
        /// Container kind the accessor holds
        found: ContainerKind,
    },
    /// Key is not present in the mapping.
    #[error("Key not found: '{key}'")]
    KeyNotFound {
        /// Requested key
        key: String,
    },
    /// Index is negative or not below the sequence length.
    #[error("Index out of bounds: {index} (length {len})")]
    IndexOutOfBounds {
        /// Requested index
        index: i64,
        /// Sequence length at lookup time
        len: usize,
    },
    /// Located node does not have the requested dynamic type.
    #[error("Type mismatch at {location}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Where the node was found
        location: Location,
        /// What the target accepts, e.g. `number` or `object or array`
        expected: &'static str,
        /// Dynamic type of the node
        found: ValueKind,
    },
    /// Transform produced no result for the located node.
    #[error("Transform rejected {found} value at {location}")]
    TransformRejected {
        /// Where the node was found
        location: Location,
        /// Dynamic type of the rejected node
        found: ValueKind,
    },
    /// Node cannot back an accessor.
    #[error("Not a container: expected object or array, found {found}")]
    NotAContainer {
        /// Dynamic type of the node
        found: ValueKind,
    },
    /// Date format pattern contains an unknown or malformed specifier.
    #[error("Invalid date format: '{format}'")]
    InvalidDateFormat {
        /// Offending pattern
        format: String,
    },
}

impl MappingError {
    /// True when the entry simply does not exist (missing key or index out of range)
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            MappingError::KeyNotFound { .. } | MappingError::IndexOutOfBounds { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MappingError>;
