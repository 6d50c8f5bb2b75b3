//! jsonmap Test Utilities
//!
//! Shared builders, fixtures and proptest strategies for the jsonmap tests.

use serde_json::{Map, Value};

pub mod strategies;

/// Builder for creating test documents with common field types
pub struct DocumentBuilder {
    fields: Map<String, Value>,
}

impl DocumentBuilder {
    /// Create a new document builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a field with a floating point value (NaN and infinities become null)
    pub fn float(mut self, key: &str, value: f64) -> Self {
        let number = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.fields.insert(key.to_string(), number);
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a field with an object value
    pub fn object(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a field with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the document as a mapping
    pub fn build_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Build the document as a JSON object node
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned documents exercising typical field shapes
pub struct Fixtures;

impl Fixtures {
    /// A person record with scalar, date, URL and enum-like fields
    pub fn person() -> Value {
        DocumentBuilder::new()
            .string("name", "Ada")
            .int("born", 1815)
            .bool("active", false)
            .null("spouse")
            .string("birthday", "1815-12-10")
            .string("homepage", "https://example.com/ada")
            .int("heading", 1)
            .string("level", "warn")
            .float("score", 9.5)
            .array("tags", vec![Value::from("math"), Value::from("poetry")])
            .object(
                "address",
                DocumentBuilder::new()
                    .string("city", "London")
                    .string("country", "UK")
                    .build(),
            )
            .build()
    }

    /// A sequence of three single-letter strings
    pub fn letters() -> Value {
        Value::Array(vec![Value::from("a"), Value::from("b"), Value::from("c")])
    }

    /// The same field name holding a different JSON type in each record
    pub fn schema_drift_records() -> Vec<Value> {
        vec![
            DocumentBuilder::new()
                .string("id", "1")
                .int("value", 42)
                .build(),
            DocumentBuilder::new()
                .string("id", "2")
                .string("value", "hello")
                .build(),
            DocumentBuilder::new()
                .string("id", "3")
                .bool("value", true)
                .build(),
            DocumentBuilder::new().string("id", "4").null("value").build(),
        ]
    }

    /// Records at numeric and emptiness boundaries
    pub fn boundary_value_records() -> Vec<Value> {
        vec![
            DocumentBuilder::new()
                .string("id", "int_max")
                .int("value", i64::MAX)
                .build(),
            DocumentBuilder::new()
                .string("id", "int_min")
                .int("value", i64::MIN)
                .build(),
            DocumentBuilder::new()
                .string("id", "empty_string")
                .string("value", "")
                .build(),
            DocumentBuilder::new()
                .string("id", "empty_array")
                .array("value", vec![])
                .build(),
            DocumentBuilder::new()
                .string("id", "empty_object")
                .object("value", Value::Object(Map::new()))
                .build(),
        ]
    }

    /// Many log-like records for benchmarks
    pub fn large_record_set(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| {
                let level = match i % 4 {
                    0 => "debug",
                    1 => "info",
                    2 => "warn",
                    _ => "error",
                };

                let timestamp = format!("2024-01-01 00:{:02}:{:02}", (i / 60) % 60, i % 60);

                DocumentBuilder::new()
                    .int("id", i as i64)
                    .string("timestamp", &timestamp)
                    .string("level", level)
                    .string("user", &format!("user_{}", i % 100))
                    .string("source", &format!("https://example.com/logs/{}", i))
                    .build()
            })
            .collect()
    }
}

/// Install a `tracing` subscriber writing to the test harness output
///
/// Honours `RUST_LOG` (e.g. `RUST_LOG=jsonmap=trace`). Safe to call from
/// every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
