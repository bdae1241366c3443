//! Configuration error types for the document crate.
//!
//! Document decoding and validation errors live in [`crate::document`];
//! this module only covers the collaborators that feed the document
//! builders (base URLs, page-size defaults and the service registry).
//!
//! # Example
//!
//! ```rust
//! use jsonapi_document::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building or looking up configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is empty or malformed.
    #[error("Invalid base URL '{url}'. Expected an absolute URL (e.g., 'https://api.example.com') or a path starting with '/'.")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
    },

    /// A page size of zero was supplied.
    #[error("Page size must be at least 1.")]
    ZeroPageSize,

    /// The default page size exceeds the configured maximum.
    #[error("Default page size {default} exceeds the maximum page size {max}.")]
    PageSizeAboveMaximum {
        /// The requested default page size.
        default: u64,
        /// The configured maximum page size.
        max: u64,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable was present but could not be parsed.
    #[error("Environment variable '{name}' has invalid value '{value}'.")]
    InvalidEnvValue {
        /// The variable name.
        name: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// No configuration is registered under the requested service name.
    #[error("No configuration registered for service '{service}'.")]
    UnknownService {
        /// The service name that was looked up.
        service: String,
    },
}
