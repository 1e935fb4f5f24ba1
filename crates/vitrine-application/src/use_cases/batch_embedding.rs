//! Batch Embedding Use Case
//!
//! Embeds every product from its image and descriptive text. One product
//! failing never stops the batch: it is stored with a zero vector, flagged
//! as degraded and listed in the run summary.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use vitrine_domain::constants::EMBEDDING_DESCRIPTION_CHARS;
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::{EmbeddingProvider, VectorIndex};
use vitrine_domain::value_objects::{Embedding, EmbeddingInput, ProductRecord, RunSummary};
use vitrine_domain::VectorStore;

/// Progress is logged every this many products
const PROGRESS_INTERVAL: usize = 10;

/// Vectors and records produced by one embedding pass, row-aligned
#[derive(Debug, Clone)]
pub struct EmbeddingBatch {
    /// One vector per record, zero for degraded records
    pub vectors: Vec<Vec<f32>>,
    /// Records with `embedding_failed` set where embedding failed
    pub records: Vec<ProductRecord>,
    /// Audit summary of the pass
    pub summary: RunSummary,
}

impl EmbeddingBatch {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load the batch into a store backed by `index`
    pub fn into_store(self, index: Box<dyn VectorIndex>) -> Result<VectorStore<ProductRecord>> {
        let mut store = VectorStore::with_dimension(index, self.summary.embedding_dimension)?;
        for (vector, record) in self.vectors.iter().zip(self.records) {
            store.add(vector, record)?;
        }
        Ok(store)
    }
}

/// Batch embedding service
pub struct BatchEmbeddingService {
    provider: Arc<dyn EmbeddingProvider>,
    batch_delay: Duration,
    description_chars: usize,
}

impl BatchEmbeddingService {
    /// Create the service, pausing `batch_delay` between provider calls
    pub fn new(provider: Arc<dyn EmbeddingProvider>, batch_delay: Duration) -> Self {
        Self {
            provider,
            batch_delay,
            description_chars: EMBEDDING_DESCRIPTION_CHARS,
        }
    }

    /// Override how much of the description goes into the embedding text
    pub fn with_description_chars(mut self, chars: usize) -> Self {
        self.description_chars = chars;
        self
    }

    /// Embed every product
    pub async fn run(&self, products: Vec<ProductRecord>) -> EmbeddingBatch {
        let dimension = self.provider.dimensions();
        let total = products.len();
        let mut vectors = Vec::with_capacity(total);
        let mut records = Vec::with_capacity(total);
        let mut failed_products = Vec::new();

        info!(
            total,
            provider = self.provider.provider_name(),
            model = self.provider.model(),
            dimension,
            "Starting embedding pass"
        );

        for (i, mut product) in products.into_iter().enumerate() {
            if i > 0 && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }

            match self.embed_product(&product, dimension).await {
                Ok(vector) => {
                    product.embedding_failed = false;
                    vectors.push(vector);
                }
                Err(e) => {
                    warn!(
                        product_id = %product.product_id,
                        error = %e,
                        "Embedding failed, storing zero vector"
                    );
                    product.embedding_failed = true;
                    failed_products.push(product.product_id.clone());
                    vectors.push(Embedding::zeros(dimension, self.provider.model()).vector);
                }
            }
            records.push(product);

            if (i + 1) % PROGRESS_INTERVAL == 0 {
                info!(processed = i + 1, total, "Embedding progress");
            }
        }

        let summary = RunSummary {
            total_products: total,
            successful_embeddings: total - failed_products.len(),
            failed_products,
            embedding_dimension: dimension,
            model_id: self.provider.model().to_string(),
            generated_at: Some(Utc::now()),
        };
        info!(
            successful = summary.successful_embeddings,
            failed = summary.failed_count(),
            "Embedding pass complete"
        );

        EmbeddingBatch {
            vectors,
            records,
            summary,
        }
    }

    async fn embed_product(&self, product: &ProductRecord, dimension: usize) -> Result<Vec<f32>> {
        let path = product.local_image_path.as_deref().ok_or_else(|| {
            Error::embedding(format!("No local image for product {}", product.product_id))
        })?;
        let image = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to read image {path}"), e))?;

        let input = EmbeddingInput::multimodal(
            Some(product.embedding_text(self.description_chars)),
            Some(image),
        );
        let embedding = self.provider.embed(&input).await?;

        if embedding.vector.len() != dimension {
            return Err(Error::dimension_mismatch(dimension, embedding.vector.len()));
        }
        if embedding.vector.iter().any(|v| !v.is_finite()) {
            return Err(Error::embedding("Provider returned a non-finite component"));
        }
        Ok(embedding.vector)
    }
}
