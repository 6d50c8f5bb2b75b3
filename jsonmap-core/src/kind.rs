//! Dynamic type and container kind enumerations

use serde_json::Value;
use std::fmt;

/// Dynamic type of a decoded JSON node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Present but null
    Null,
    /// Boolean value
    Bool,
    /// Numeric value (integer or floating point)
    Number,
    /// String value
    String,
    /// Object (string-keyed mapping)
    Object,
    /// Array (ordered sequence)
    Array,
}

impl ValueKind {
    /// Classify a node
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Human-readable name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which backing container an [`Accessor`](crate::Accessor) holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// String-keyed mapping, addressed by key
    Keyed,
    /// Ordered sequence, addressed by index
    Indexed,
}

impl ContainerKind {
    /// Human-readable name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Keyed => "keyed",
            ContainerKind::Indexed => "indexed",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
