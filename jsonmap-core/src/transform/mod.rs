//! Value transforms
//!
//! A [`Transform`] turns one decoded node into a richer Rust value. It never
//! errors: returning `None` is the only failure signal, and the
//! [`Accessor`](crate::Accessor) reports it as
//! [`MappingError::TransformRejected`](crate::MappingError::TransformRejected).
//!
//! Built-in transforms:
//!
//! - [`DateTransform`]: string parsed against a fixed date format
//! - [`UrlTransform`]: string parsed as a URL
//! - [`EnumTransform`]: raw value resolved to an enum case via [`RawRepresentable`]

pub mod date;
pub mod raw;
pub mod url;

pub use date::DateTransform;
pub use raw::{EnumTransform, RawRepresentable};
pub use self::url::UrlTransform;

use serde_json::Value;

/// Conversion from a decoded node to `Self::Output`
pub trait Transform {
    /// Value produced on success
    type Output;

    /// Attempt the conversion; `None` means the input was rejected
    fn apply(&self, input: &Value) -> Option<Self::Output>;
}

impl<T: Transform + ?Sized> Transform for &T {
    type Output = T::Output;

    fn apply(&self, input: &Value) -> Option<Self::Output> {
        (**self).apply(input)
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    type Output = T::Output;

    fn apply(&self, input: &Value) -> Option<Self::Output> {
        (**self).apply(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Uppercase;

    impl Transform for Uppercase {
        type Output = String;

        fn apply(&self, input: &Value) -> Option<String> {
            input.as_str().map(str::to_uppercase)
        }
    }

    #[test]
    fn test_custom_transform() {
        assert_eq!(Uppercase.apply(&json!("ada")), Some("ADA".to_string()));
        assert_eq!(Uppercase.apply(&json!(1)), None);
    }

    #[test]
    fn test_transform_by_reference_and_box() {
        let shared = Uppercase;
        assert_eq!((&shared).apply(&json!("x")), Some("X".to_string()));

        let boxed: Box<dyn Transform<Output = String>> = Box::new(Uppercase);
        assert_eq!(boxed.apply(&json!("y")), Some("Y".to_string()));
    }
}
