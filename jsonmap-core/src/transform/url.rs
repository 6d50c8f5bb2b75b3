//! URL parsing

use super::Transform;
use ::url::Url;
use serde_json::Value;

/// Parses string nodes into [`Url`]s
///
/// Parsing follows the WHATWG URL Standard as implemented by the `url` crate.
/// Without a base, only absolute URLs are accepted. The parser is lenient in
/// the standard's ways: surrounding whitespace is trimmed and spaces inside a
/// path or query are percent-encoded, while a space in a host is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlTransform {
    base: Option<Url>,
}

impl UrlTransform {
    /// Transform accepting absolute URLs only
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform resolving relative references against `base`
    pub fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    /// Base used for relative references, if any
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }
}

impl Transform for UrlTransform {
    type Output = Url;

    fn apply(&self, input: &Value) -> Option<Self::Output> {
        let text = input.as_str()?;
        match &self.base {
            Some(base) => base.join(text).ok(),
            None => Url::parse(text).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absolute_url() {
        let url = UrlTransform::new()
            .apply(&json!("https://example.com/docs?page=2"))
            .unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/docs");
        assert_eq!(url.query(), Some("page=2"));
    }

    #[test]
    fn test_rejects_relative_without_base() {
        let transform = UrlTransform::new();
        assert_eq!(
            transform.apply(&json!("not a url with spaces and no scheme")),
            None
        );
        assert_eq!(transform.apply(&json!("/relative/path")), None);
        assert_eq!(transform.apply(&json!("")), None);
    }

    #[test]
    fn test_rejects_non_string_input() {
        let transform = UrlTransform::new();
        assert_eq!(transform.apply(&json!(42)), None);
        assert_eq!(transform.apply(&json!(["https://example.com"])), None);
    }

    #[test]
    fn test_parser_leniency() {
        let transform = UrlTransform::new();

        // Surrounding whitespace is trimmed.
        let trimmed = transform.apply(&json!("  https://example.com/  ")).unwrap();
        assert_eq!(trimmed.as_str(), "https://example.com/");

        // Spaces in the path are percent-encoded.
        let encoded = transform.apply(&json!("https://example.com/a b")).unwrap();
        assert_eq!(encoded.as_str(), "https://example.com/a%20b");

        // Spaces in the host are not.
        assert_eq!(transform.apply(&json!("https://exa mple.com/")), None);

        // Non-special schemes are accepted.
        let mail = transform.apply(&json!("mailto:ada@example.com")).unwrap();
        assert_eq!(mail.scheme(), "mailto");
    }

    #[test]
    fn test_relative_with_base() {
        let base = Url::parse("https://example.com/api/v1/").unwrap();
        let transform = UrlTransform::with_base(base.clone());
        assert_eq!(transform.base(), Some(&base));

        let url = transform.apply(&json!("users/7")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/users/7");

        let absolute = transform.apply(&json!("https://other.org/")).unwrap();
        assert_eq!(absolute.host_str(), Some("other.org"));
    }
}
