//! Per-service configuration lookup.
//!
//! A process serving several resource families can register one
//! [`DocumentConfig`] per service and look it up from request handlers.
//! Registration and lookup may race, so the map sits behind an [`RwLock`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::DocumentConfig;
use crate::error::ConfigError;

/// A thread-safe map from service name to [`DocumentConfig`].
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{BaseUrl, DocumentConfig, ServiceRegistry};
///
/// let registry = ServiceRegistry::new();
/// let config = DocumentConfig::builder()
///     .base_url(BaseUrl::new("/users-api").unwrap())
///     .build()
///     .unwrap();
///
/// registry.register("users", config);
/// assert_eq!(registry.get("users").unwrap().base_url().as_ref(), "/users-api");
/// assert!(registry.get("orders").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: RwLock<HashMap<String, DocumentConfig>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the configuration for a service.
    ///
    /// Returns the previously registered configuration, if any.
    pub fn register(
        &self,
        service: impl Into<String>,
        config: DocumentConfig,
    ) -> Option<DocumentConfig> {
        let service = service.into();
        tracing::debug!(service = %service, "registering document configuration");
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(service, config)
    }

    /// Returns a copy of the configuration registered for `service`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownService`] if nothing is registered
    /// under that name.
    pub fn get(&self, service: &str) -> Result<DocumentConfig, ConfigError> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(service)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownService {
                service: service.to_string(),
            })
    }

    /// Removes the configuration registered for `service`.
    pub fn remove(&self, service: &str) -> Option<DocumentConfig> {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(service)
    }

    /// Returns the registered service names in sorted order.
    #[must_use]
    pub fn services(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

// Verify ServiceRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceRegistry>();
};
