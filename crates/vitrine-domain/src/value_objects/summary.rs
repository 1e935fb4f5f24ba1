//! Run and store summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit record written after a bulk embedding pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    /// Number of products processed
    pub total_products: usize,
    /// Number of products with a real embedding
    pub successful_embeddings: usize,
    /// Identifiers of products stored with a zero vector
    pub failed_products: Vec<String>,
    /// Dimension of every stored vector
    pub embedding_dimension: usize,
    /// Embedding model used for the pass
    pub model_id: String,
    /// When the pass finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    /// Number of failed products
    pub fn failed_count(&self) -> usize {
        self.failed_products.len()
    }

    /// Whether every product was embedded
    pub fn is_complete(&self) -> bool {
        self.failed_products.is_empty()
    }
}

/// Statistics about a loaded store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreStats {
    /// Number of product records
    pub total_products: usize,
    /// Number of stored vectors
    pub total_embeddings: usize,
    /// Store dimension, 0 when not yet established
    pub embedding_dimension: usize,
    /// Records flagged as failed embeddings
    pub degraded_records: usize,
    /// Distinct categories, sorted
    pub categories: Vec<String>,
}
