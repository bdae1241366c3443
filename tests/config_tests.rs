//! Integration tests for configuration loading and the service registry.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use jsonapi_document::{BaseUrl, ConfigError, DocumentConfig, PageSize, ServiceRegistry};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_full_workflow_lookup_build_and_read_back() {
    let config = DocumentConfig::from_lookup(lookup_from(&[
        ("JSONAPI_BASE_URL", "https://api.example.com/v2/"),
        ("JSONAPI_PAGE_SIZE", "50"),
        ("JSONAPI_MAX_PAGE_SIZE", "200"),
    ]))
    .unwrap();

    assert_eq!(config.base_url().as_ref(), "https://api.example.com/v2");
    assert_eq!(config.default_page_size().get(), 50);
    assert_eq!(config.max_page_size().get(), 200);
}

#[test]
fn test_lookup_defaults_page_sizes() {
    let config =
        DocumentConfig::from_lookup(lookup_from(&[("JSONAPI_BASE_URL", "/api")])).unwrap();

    assert_eq!(config.default_page_size(), PageSize::default());
    assert_eq!(config.max_page_size(), PageSize::DEFAULT_MAX);
}

#[test]
fn test_lookup_requires_base_url() {
    let result = DocumentConfig::from_lookup(lookup_from(&[]));
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "base_url" })
    ));
}

#[test]
fn test_lookup_rejects_non_numeric_page_size() {
    let result = DocumentConfig::from_lookup(lookup_from(&[
        ("JSONAPI_BASE_URL", "/api"),
        ("JSONAPI_PAGE_SIZE", "lots"),
    ]));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvValue { name: "JSONAPI_PAGE_SIZE", .. })
    ));
}

#[test]
fn test_lookup_rejects_default_above_maximum() {
    let result = DocumentConfig::from_lookup(lookup_from(&[
        ("JSONAPI_BASE_URL", "/api"),
        ("JSONAPI_PAGE_SIZE", "300"),
        ("JSONAPI_MAX_PAGE_SIZE", "100"),
    ]));
    assert!(matches!(
        result,
        Err(ConfigError::PageSizeAboveMaximum { default: 300, max: 100 })
    ));
}

#[test]
fn test_invalid_base_urls() {
    for url in ["", "api.example.com", "https://", "ht tp://x", "1http://x"] {
        assert!(
            matches!(BaseUrl::new(url), Err(ConfigError::InvalidBaseUrl { .. })),
            "expected {url:?} to be rejected"
        );
    }
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(ServiceRegistry::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let config = DocumentConfig::builder()
                    .base_url(BaseUrl::new(format!("/service-{i}")).unwrap())
                    .build()
                    .unwrap();
                registry.register(format!("service-{i}"), config);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.services().len(), 4);
    assert_eq!(
        registry.get("service-2").unwrap().base_url().as_ref(),
        "/service-2"
    );
    assert!(matches!(
        registry.get("missing"),
        Err(ConfigError::UnknownService { .. })
    ));
}
