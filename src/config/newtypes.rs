//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that the
//! document builders can rely on a well-formed base URL and a non-zero
//! page size without re-checking them per request.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL used as the prefix of every generated link.
///
/// Accepts either an absolute URL with a scheme and host
/// (`https://api.example.com/v1`) or an absolute path (`/v1`). Trailing
/// slashes are trimmed so that links can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1");
/// assert_eq!(url.scheme(), Some("https"));
///
/// let path = BaseUrl::new("/v1").unwrap();
/// assert_eq!(path.scheme(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl {
    url: String,
    scheme_end: Option<usize>,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is empty, has no
    /// scheme and does not start with `/`, or has an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if trimmed.starts_with('/') {
            return Ok(Self {
                url: trimmed.trim_end_matches('/').to_string(),
                scheme_end: None,
            });
        }

        let scheme_end = trimmed
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &trimmed[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &trimmed[scheme_end + 3..];
        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if host_end == 0 {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url: trimmed.trim_end_matches('/').to_string(),
            scheme_end: Some(scheme_end),
        })
    }

    /// Returns the URL scheme, or `None` for path-only base URLs.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme_end.map(|end| &self.url[..end])
    }

    /// Joins path segments onto the base URL with `/` separators.
    ///
    /// ```rust
    /// use jsonapi_document::BaseUrl;
    ///
    /// let url = BaseUrl::new("/api").unwrap();
    /// assert_eq!(url.join(&["users", "42"]), "/api/users/42");
    /// ```
    #[must_use]
    pub fn join(&self, segments: &[&str]) -> String {
        join_url(&self.url, segments)
    }
}

/// Appends `segments` to `base`, one `/` between each part.
///
/// Trailing slashes on `base` and surrounding slashes on each segment are
/// dropped, so every generated link follows the same rule as
/// [`BaseUrl::join`].
pub(crate) fn join_url(base: &str, segments: &[&str]) -> String {
    segments
        .iter()
        .fold(base.trim_end_matches('/').to_string(), |mut acc, segment| {
            acc.push('/');
            acc.push_str(segment.trim_matches('/'));
            acc
        })
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A page size guaranteed to be at least 1.
///
/// [`build_pagination`](crate::build_pagination) divides by the page size,
/// so carrying it as a `PageSize` moves the non-zero check to the edge.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::PageSize;
///
/// let size = PageSize::new(25).unwrap();
/// assert_eq!(size.get(), 25);
/// assert!(PageSize::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(u64);

impl PageSize {
    /// The page size used when nothing else is configured.
    pub const DEFAULT: Self = Self(100);

    /// The upper bound applied to requested page sizes by default.
    pub const DEFAULT_MAX: Self = Self(1000);

    /// Creates a new validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] if `size` is zero.
    pub fn new(size: u64) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self(size))
    }

    /// Returns the page size as a plain integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let size = u64::deserialize(deserializer)?;
        Self::new(size).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_absolute_url() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
        assert_eq!(url.scheme(), Some("https"));

        let url = BaseUrl::new("http://localhost:8080/v1/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080/v1");
        assert_eq!(url.scheme(), Some("http"));
    }

    #[test]
    fn test_base_url_accepts_absolute_path() {
        let url = BaseUrl::new("/api/v2/").unwrap();
        assert_eq!(url.as_ref(), "/api/v2");
        assert_eq!(url.scheme(), None);
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("   ").is_err());
        assert!(BaseUrl::new("api.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("h2tp://example.com").is_err());
        assert!(BaseUrl::new("/with space").is_err());
    }

    #[test]
    fn test_base_url_join_trims_segment_slashes() {
        let url = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(
            url.join(&["/articles/", "7"]),
            "https://api.example.com/articles/7"
        );
    }

    #[test]
    fn test_join_url_matches_base_url_join() {
        let url = BaseUrl::new("/api").unwrap();
        assert_eq!(join_url("/api/", &["users", "/42/"]), url.join(&["users", "42"]));
        assert_eq!(join_url("/api", &[]), "/api");
    }

    #[test]
    fn test_base_url_deserialize_validates() {
        let url: BaseUrl = serde_json::from_str(r#""https://api.example.com/""#).unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");

        let result: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(matches!(PageSize::new(0), Err(ConfigError::ZeroPageSize)));
        assert_eq!(PageSize::new(1).unwrap().get(), 1);
        assert_eq!(PageSize::default(), PageSize::DEFAULT);
    }

    #[test]
    fn test_page_size_deserialize_validates() {
        let size: PageSize = serde_json::from_str("50").unwrap();
        assert_eq!(size.get(), 50);

        let result: Result<PageSize, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
