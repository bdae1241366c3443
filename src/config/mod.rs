//! Configuration consumed by the document builders.
//!
//! The document model itself is stateless; configuration only supplies the
//! base URL used to build `self`/pagination links and the page-size defaults
//! applied to incoming page requests.
//!
//! # Overview
//!
//! - [`DocumentConfig`]: base URL plus page-size defaults
//! - [`DocumentConfigBuilder`]: a builder for constructing [`DocumentConfig`]
//! - [`BaseUrl`]: a validated link prefix
//! - [`PageSize`]: a non-zero page size
//! - [`ServiceRegistry`]: per-service configuration guarded by a read-write lock
//!
//! # Example
//!
//! ```rust
//! use jsonapi_document::{BaseUrl, DocumentConfig, PageSize};
//!
//! let config = DocumentConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .default_page_size(PageSize::new(25).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_page_size().get(), 25);
//! ```

mod newtypes;
mod registry;

pub(crate) use newtypes::join_url;
pub use newtypes::{BaseUrl, PageSize};
pub use registry::ServiceRegistry;

use crate::error::ConfigError;

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "JSONAPI_BASE_URL";
/// Environment variable holding the default page size.
pub const ENV_PAGE_SIZE: &str = "JSONAPI_PAGE_SIZE";
/// Environment variable holding the maximum page size.
pub const ENV_MAX_PAGE_SIZE: &str = "JSONAPI_MAX_PAGE_SIZE";

/// Settings the document builders read for one service.
///
/// `DocumentConfig` is `Clone`, `Send`, and `Sync`; handlers typically hold
/// it behind an `Arc` or look it up from a [`ServiceRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentConfig {
    base_url: BaseUrl,
    default_page_size: PageSize,
    max_page_size: PageSize,
}

impl DocumentConfig {
    /// Creates a new builder for constructing a `DocumentConfig`.
    #[must_use]
    pub fn builder() -> DocumentConfigBuilder {
        DocumentConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads [`ENV_BASE_URL`] (required), [`ENV_PAGE_SIZE`] and
    /// [`ENV_MAX_PAGE_SIZE`], falling back to the builder defaults for the
    /// page sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when the base URL is
    /// unset, [`ConfigError::InvalidEnvValue`] when a page size is not an
    /// integer, and any validation error from the builder.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// This is the layering logic behind [`DocumentConfig::from_env`], exposed
    /// so that callers can source values from somewhere other than the
    /// process environment.
    ///
    /// # Errors
    ///
    /// See [`DocumentConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            builder = builder.default_page_size(parse_page_size(ENV_PAGE_SIZE, &size)?);
        }
        if let Some(size) = lookup(ENV_MAX_PAGE_SIZE) {
            builder = builder.max_page_size(parse_page_size(ENV_MAX_PAGE_SIZE, &size)?);
        }

        builder.build()
    }

    /// Returns the base URL used as the prefix of generated links.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the page size applied when a request does not specify one.
    #[must_use]
    pub const fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }

    /// Returns the largest page size a request may ask for.
    #[must_use]
    pub const fn max_page_size(&self) -> PageSize {
        self.max_page_size
    }
}

fn parse_page_size(name: &'static str, raw: &str) -> Result<PageSize, ConfigError> {
    let size = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            name,
            value: raw.to_string(),
        })?;
    PageSize::new(size)
}

// Verify DocumentConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentConfig>();
};

/// Builder for constructing [`DocumentConfig`] instances.
///
/// `base_url` is required.
///
/// # Defaults
///
/// - `default_page_size`: [`PageSize::DEFAULT`] (100)
/// - `max_page_size`: [`PageSize::DEFAULT_MAX`] (1000)
#[derive(Debug, Default)]
pub struct DocumentConfigBuilder {
    base_url: Option<BaseUrl>,
    default_page_size: Option<PageSize>,
    max_page_size: Option<PageSize>,
}

impl DocumentConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn default_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = Some(size);
        self
    }

    /// Sets the maximum page size.
    #[must_use]
    pub const fn max_page_size(mut self, size: PageSize) -> Self {
        self.max_page_size = Some(size);
        self
    }

    /// Builds the [`DocumentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set
    /// and [`ConfigError::PageSizeAboveMaximum`] if the default page size is
    /// larger than the maximum.
    pub fn build(self) -> Result<DocumentConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let default_page_size = self.default_page_size.unwrap_or_default();
        let max_page_size = self.max_page_size.unwrap_or(PageSize::DEFAULT_MAX);

        if default_page_size > max_page_size {
            return Err(ConfigError::PageSizeAboveMaximum {
                default: default_page_size.get(),
                max: max_page_size.get(),
            });
        }

        Ok(DocumentConfig {
            base_url,
            default_page_size,
            max_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = DocumentConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DocumentConfig::builder().base_url(base_url()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.example.com");
        assert_eq!(config.default_page_size(), PageSize::DEFAULT);
        assert_eq!(config.max_page_size(), PageSize::DEFAULT_MAX);
    }

    #[test]
    fn test_builder_rejects_default_above_max() {
        let result = DocumentConfig::builder()
            .base_url(base_url())
            .default_page_size(PageSize::new(50).unwrap())
            .max_page_size(PageSize::new(10).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::PageSizeAboveMaximum {
                default: 50,
                max: 10
            })
        ));
    }

    #[test]
    fn test_from_lookup_layers_values_over_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "/api"),
            (ENV_PAGE_SIZE, " 20 "),
        ]);

        let config =
            DocumentConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();

        assert_eq!(config.base_url().as_ref(), "/api");
        assert_eq!(config.default_page_size().get(), 20);
        assert_eq!(config.max_page_size(), PageSize::DEFAULT_MAX);
    }

    #[test]
    fn test_from_lookup_requires_base_url() {
        let result = DocumentConfig::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_from_lookup_rejects_non_numeric_page_size() {
        let result = DocumentConfig::from_lookup(|name| match name {
            ENV_BASE_URL => Some("/api".to_string()),
            ENV_MAX_PAGE_SIZE => Some("lots".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue {
                name: ENV_MAX_PAGE_SIZE,
                ..
            })
        ));
    }

    #[test]
    fn test_from_lookup_rejects_zero_page_size() {
        let result = DocumentConfig::from_lookup(|name| match name {
            ENV_BASE_URL => Some("/api".to_string()),
            ENV_PAGE_SIZE => Some("0".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(ConfigError::ZeroPageSize)));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = DocumentConfig::builder().base_url(base_url()).build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned, config);
        assert!(format!("{config:?}").contains("DocumentConfig"));
    }
}
