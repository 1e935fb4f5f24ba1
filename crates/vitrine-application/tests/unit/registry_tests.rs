//! Tests for the embedding provider registry
//!
//! Uses `extern crate vitrine_providers` to force linkme registration of the
//! real providers.

extern crate vitrine_providers;

use vitrine_application::ports::registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};

#[test]
fn test_builtin_providers_are_registered() {
    let providers = list_embedding_providers();
    let names: Vec<_> = providers.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"null"), "Available: {names:?}");
    assert!(names.contains(&"titan"), "Available: {names:?}");
}

#[test]
fn test_resolve_null_provider_with_dimensions() {
    let config = EmbeddingProviderConfig::new("null").with_dimensions(16);

    let provider = resolve_embedding_provider(&config).expect("null provider");

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 16);
}

#[test]
fn test_resolve_titan_provider() {
    let config = EmbeddingProviderConfig::new("titan")
        .with_model("amazon.titan-embed-image-v1")
        .with_region("us-east-1")
        .with_dimensions(1024);

    let provider = resolve_embedding_provider(&config).expect("titan provider");

    assert_eq!(provider.provider_name(), "titan");
    assert_eq!(provider.model(), "amazon.titan-embed-image-v1");
    assert_eq!(provider.dimensions(), 1024);
}

#[test]
fn test_unknown_provider_lists_alternatives() {
    let err = match resolve_embedding_provider(&EmbeddingProviderConfig::new("nope")) {
        Ok(_) => panic!("unknown provider resolved"),
        Err(e) => e,
    };

    assert!(err.contains("Unknown embedding provider 'nope'"));
    assert!(err.contains("null"));
}
