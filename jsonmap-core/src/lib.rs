//! jsonmap core - Typed access into decoded JSON documents
//!
//! This crate wraps an already-decoded `serde_json` mapping or sequence and
//! extracts strongly-typed values from it by key or index. It includes:
//!
//! - [`Accessor`]: keyed or indexed container with fallible typed lookups
//! - [`FromValue`]: strict direct casts (no coercion between JSON types)
//! - [`Transform`]: pluggable conversions, with date, URL and enum built-ins
//! - [`MappingError`]: lookup failures carrying the offending key or index
//!
//! Parsing JSON text and serializing values are left to `serde_json`.
//!
//! ```
//! use jsonmap_core::{Accessor, DateTransform, UrlTransform};
//! use serde_json::json;
//!
//! let doc = Accessor::try_from(json!({
//!     "homepage": "https://example.com/",
//!     "joined": "2021-06-01"
//! }))
//! .unwrap();
//!
//! let homepage = doc.value_with("homepage", UrlTransform::new()).unwrap();
//! assert_eq!(homepage.host_str(), Some("example.com"));
//!
//! let joined = doc
//!     .value_with("joined", DateTransform::new("%Y-%m-%d").unwrap())
//!     .unwrap();
//! assert_eq!(joined.to_rfc3339(), "2021-06-01T00:00:00+00:00");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod accessor;
pub mod cast;
pub mod error;
pub mod kind;
pub mod locator;
pub mod transform;

// Re-export commonly used types
pub use accessor::Accessor;
pub use cast::FromValue;
pub use error::{MappingError, Result};
pub use kind::{ContainerKind, ValueKind};
pub use locator::{Location, Locator};
pub use transform::{DateTransform, EnumTransform, RawRepresentable, Transform, UrlTransform};
