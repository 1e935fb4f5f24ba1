//! Query Use Case
//!
//! Read-only queries over a loaded store: free text, image, both, or
//! "more like this product".

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::EmbeddingProvider;
use vitrine_domain::value_objects::{EmbeddingInput, ProductRecord, SearchHit, StoreStats};
use vitrine_domain::VectorStore;

/// Query service over a store that is no longer written to
pub struct QueryService {
    store: Arc<VectorStore<ProductRecord>>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl QueryService {
    /// Create the service
    pub fn new(
        store: Arc<VectorStore<ProductRecord>>,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self { store, provider }
    }

    /// The underlying store
    pub fn store(&self) -> &VectorStore<ProductRecord> {
        &self.store
    }

    /// The provider used to embed queries
    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    /// Products matching a free-text query
    pub async fn search_by_text(
        &self,
        text: &str,
        top_k: usize,
        threshold: f32,
    ) -> Result<Vec<SearchHit<ProductRecord>>> {
        let input = EmbeddingInput::multimodal(Some(text.to_string()), None);
        self.search_input(input, top_k, threshold).await
    }

    /// Products visually similar to an image
    pub async fn search_by_image(
        &self,
        image: Vec<u8>,
        top_k: usize,
        threshold: f32,
    ) -> Result<Vec<SearchHit<ProductRecord>>> {
        let input = EmbeddingInput::multimodal(None, Some(image));
        self.search_input(input, top_k, threshold).await
    }

    /// Products matching text and image embedded together
    pub async fn search_multimodal(
        &self,
        text: Option<String>,
        image: Option<Vec<u8>>,
        top_k: usize,
        threshold: f32,
    ) -> Result<Vec<SearchHit<ProductRecord>>> {
        self.search_input(EmbeddingInput::multimodal(text, image), top_k, threshold)
            .await
    }

    /// Products closest to a stored product
    ///
    /// # Errors
    /// `NotFound` when no record carries `product_id`.
    pub fn search_similar(
        &self,
        product_id: &str,
        top_k: usize,
        exclude_self: bool,
    ) -> Result<Vec<SearchHit<ProductRecord>>> {
        if top_k == 0 {
            return Err(Error::invalid_argument("top_k must be positive"));
        }
        let query = self
            .store
            .records()
            .find(|(_, record)| record.product_id == product_id)
            .map(|(vector, _)| vector.to_vec())
            .ok_or_else(|| Error::not_found(format!("Product {product_id}")))?;

        let requested = if exclude_self { top_k + 1 } else { top_k };
        let mut hits = self.store.search(&query, requested)?;
        if exclude_self {
            hits.retain(|hit| hit.metadata.product_id != product_id);
        }
        hits.truncate(top_k);
        Ok(hits)
    }

    /// Look up a product by identifier
    pub fn get_product(&self, product_id: &str) -> Result<ProductRecord> {
        self.store
            .metadata()
            .iter()
            .find(|record| record.product_id == product_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("Product {product_id}")))
    }

    /// Every product, optionally restricted to one category
    pub fn all_products(&self, category: Option<&str>) -> Vec<ProductRecord> {
        self.store
            .metadata()
            .iter()
            .filter(|record| category.is_none_or(|c| record.category == c))
            .cloned()
            .collect()
    }

    /// Store statistics
    pub fn stats(&self) -> StoreStats {
        let records = self.store.metadata();
        let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();

        StoreStats {
            total_products: records.len(),
            total_embeddings: self.store.records().count(),
            embedding_dimension: self.store.dimension().unwrap_or(0),
            degraded_records: records.iter().filter(|r| r.embedding_failed).count(),
            categories: categories.into_iter().map(str::to_string).collect(),
        }
    }

    async fn search_input(
        &self,
        input: EmbeddingInput,
        top_k: usize,
        threshold: f32,
    ) -> Result<Vec<SearchHit<ProductRecord>>> {
        input.validate()?;
        let embedding = self.provider.embed(&input).await?;
        let mut hits = self.store.search(&embedding.vector, top_k)?;
        hits.retain(|hit| hit.score >= threshold);
        debug!(hits = hits.len(), top_k, threshold, "Query answered");
        Ok(hits)
    }
}
