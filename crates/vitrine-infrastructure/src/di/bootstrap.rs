//! Application bootstrap
//!
//! [`AppContext`] owns the loaded configuration and the resolved embedding
//! provider, and runs each pipeline stage against the configured files.
//!
//! ```text
//! scrape: CatalogSource → CatalogIngestionService → products.json
//! embed:  products.json → BatchEmbeddingService → embeddings.npy + products.json + summary
//! serve:  embeddings.npy + products.json → VectorStore → QueryService
//! ```

use std::sync::Arc;

use tracing::{info, warn};
use vitrine_application::use_cases::{
    BatchEmbeddingService, CatalogIngestionService, IngestionOptions, IngestionOutcome,
    QueryService,
};
use vitrine_domain::VectorStore;
use vitrine_domain::error::Result;
use vitrine_domain::ports::providers::{CatalogSource, EmbeddingProvider};
use vitrine_domain::value_objects::{ProductRecord, RunSummary};
use vitrine_providers::BruteForceIndex;
use vitrine_providers::persistence;

use crate::config::AppConfig;
use crate::di::provider_resolvers::{CatalogSourceResolver, EmbeddingProviderResolver};

/// Configuration plus the providers resolved from it
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    embedding: Arc<dyn EmbeddingProvider>,
}

/// Resolve the providers named by `config`
///
/// # Errors
/// `Configuration` when the embedding provider cannot be resolved.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let config = Arc::new(config);
    let embedding = EmbeddingProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
    info!(
        provider = embedding.provider_name(),
        model = embedding.model(),
        dimension = embedding.dimensions(),
        "Embedding provider resolved"
    );
    Ok(AppContext { config, embedding })
}

impl AppContext {
    /// Build a context around an already constructed provider
    pub fn with_embedding_provider(
        config: AppConfig,
        embedding: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            embedding,
        }
    }

    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolved embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding)
    }

    /// Catalog scraper described by the configuration
    pub fn catalog_source(&self) -> Result<Arc<dyn CatalogSource>> {
        CatalogSourceResolver::new(Arc::clone(&self.config)).resolve_from_config()
    }

    /// Ingestion options, with optional page range overrides
    ///
    /// Without an explicit end page the configured page count is walked
    /// from the start page.
    pub fn ingestion_options(
        &self,
        start_page: Option<u32>,
        end_page: Option<u32>,
    ) -> IngestionOptions {
        let scraper = &self.config.scraper;
        let start_page = start_page.unwrap_or(scraper.start_page);
        let end_page = end_page.unwrap_or_else(|| {
            start_page.saturating_add(scraper.total_pages.saturating_sub(1))
        });
        IngestionOptions {
            start_page,
            end_page,
            images_dir: self.config.storage.images_dir.clone(),
        }
    }

    /// Walk the catalog, download images and save the product list
    pub async fn scrape(
        &self,
        source: Arc<dyn CatalogSource>,
        options: IngestionOptions,
    ) -> Result<IngestionOutcome> {
        let outcome = CatalogIngestionService::new(source, options)?.run().await?;

        let products_file = &self.config.storage.products_file;
        persistence::save_products(products_file, &outcome.products)?;
        info!(
            products = outcome.products.len(),
            path = %products_file.display(),
            "Saved product list"
        );
        Ok(outcome)
    }

    /// Embed the saved product list and persist the store
    ///
    /// Writes the vector matrix, the product list with failure flags and
    /// the run summary.
    ///
    /// # Errors
    /// `Persistence` when there is nothing to save; `Io` or `Json` when a
    /// file cannot be read or written.
    pub async fn embed(&self) -> Result<RunSummary> {
        let storage = &self.config.storage;
        let products = persistence::load_products(&storage.products_file)?;
        info!(
            products = products.len(),
            path = %storage.products_file.display(),
            "Loaded product list"
        );

        let batch = BatchEmbeddingService::new(
            Arc::clone(&self.embedding),
            self.config.embedding.batch_delay(),
        )
        .run(products)
        .await;

        let summary = batch.summary.clone();
        let index = BruteForceIndex::with_capacity(summary.embedding_dimension, batch.len());
        let store = batch.into_store(Box::new(index))?;

        persistence::save_store(&store, &storage.embeddings_file, &storage.products_file)?;
        persistence::save_summary(&storage.summary_file, &summary)?;
        Ok(summary)
    }

    /// Load the persisted store
    pub fn load_store(&self) -> Result<VectorStore<ProductRecord>> {
        let storage = &self.config.storage;
        persistence::load_store(&storage.embeddings_file, &storage.products_file)
    }

    /// Load the persisted store behind a query service
    pub fn query_service(&self) -> Result<QueryService> {
        let store = self.load_store()?;
        if let Some(dimension) = store.dimension()
            && dimension != self.embedding.dimensions()
        {
            warn!(
                store_dimension = dimension,
                provider_dimension = self.embedding.dimensions(),
                "Store and embedding provider disagree on dimension; queries will fail"
            );
        }
        Ok(QueryService::new(Arc::new(store), Arc::clone(&self.embedding)))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding.provider_name())
            .field("storage", &self.config.storage)
            .finish()
    }
}
