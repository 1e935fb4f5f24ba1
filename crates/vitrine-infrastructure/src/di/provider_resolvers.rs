//! Provider Resolvers
//!
//! ```text
//! AppConfig → Resolver → linkme registry / concrete provider → Arc<dyn Port>
//! ```

use std::sync::Arc;

use vitrine_application::ports::registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::{CatalogSource, EmbeddingProvider};
use vitrine_providers::catalog::CatalogScraperConfig;
use vitrine_providers::HttpCatalogScraper;

use crate::config::{AppConfig, EmbeddingConfig, ScraperConfig};

/// Resolver for the configured embedding provider
pub struct EmbeddingProviderResolver {
    config: Arc<AppConfig>,
}

impl EmbeddingProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    ///
    /// # Errors
    /// `Configuration` naming the registered providers when the configured
    /// name is unknown, or carrying the provider's own rejection.
    pub fn resolve_from_config(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.resolve_from_override(&embedding_config_to_registry(&self.config.embedding))
    }

    /// Resolve provider from an explicit registry config
    pub fn resolve_from_override(
        &self,
        override_config: &EmbeddingProviderConfig,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        resolve_embedding_provider(override_config).map_err(Error::configuration)
    }

    /// List available embedding providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_embedding_providers()
    }
}

impl std::fmt::Debug for EmbeddingProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProviderResolver")
            .field("provider", &self.config.embedding.provider)
            .finish()
    }
}

/// Resolver for the catalog source
pub struct CatalogSourceResolver {
    config: Arc<AppConfig>,
}

impl CatalogSourceResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Build the HTTP scraper described by the configuration
    pub fn resolve_from_config(&self) -> Result<Arc<dyn CatalogSource>> {
        let scraper = HttpCatalogScraper::new(scraper_config_to_catalog(&self.config.scraper))?;
        Ok(Arc::new(scraper))
    }
}

/// Convert the embedding section to a registry config
pub fn embedding_config_to_registry(config: &EmbeddingConfig) -> EmbeddingProviderConfig {
    let mut registry_config = EmbeddingProviderConfig::new(config.provider.as_str())
        .with_model(config.model.as_str())
        .with_region(config.region.as_str())
        .with_dimensions(config.dimensions)
        .with_timeout(config.timeout());

    if let Some(base_url) = &config.base_url {
        registry_config = registry_config.with_base_url(base_url.as_str());
    }
    if let Some(api_key) = &config.api_key {
        registry_config = registry_config.with_api_key(api_key.as_str());
    }
    registry_config
}

/// Convert the scraper section to the scraper's own settings
pub fn scraper_config_to_catalog(config: &ScraperConfig) -> CatalogScraperConfig {
    CatalogScraperConfig {
        base_url: config.base_url.clone(),
        list_path: config.list_path.clone(),
        detail_marker: config.detail_marker.clone(),
        request_delay: config.request_delay(),
        timeout: config.timeout(),
        user_agent: config.user_agent.clone(),
    }
}
