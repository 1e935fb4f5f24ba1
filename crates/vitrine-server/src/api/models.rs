//! Request and response bodies

use serde::{Deserialize, Serialize};
use vitrine_domain::value_objects::{ProductRecord, SearchHit};

/// Free-text search request
#[derive(Debug, Deserialize)]
pub struct TextSearchRequest {
    /// Query text
    pub query: String,
    /// Number of results (clamped to `1..=50`)
    pub top_k: Option<usize>,
    /// Minimum similarity
    pub threshold: Option<f32>,
}

/// Image search request
#[derive(Debug, Deserialize)]
pub struct ImageSearchRequest {
    /// Image bytes, base64 encoded, optionally as a `data:` URL
    pub image_base64: String,
    /// Number of results (clamped to `1..=50`)
    pub top_k: Option<usize>,
    /// Minimum similarity
    pub threshold: Option<f32>,
}

/// Combined text and image search request
#[derive(Debug, Deserialize)]
pub struct MultimodalSearchRequest {
    /// Query text
    pub query: Option<String>,
    /// Image bytes, base64 encoded, optionally as a `data:` URL
    pub image_base64: Option<String>,
    /// Number of results (clamped to `1..=50`)
    pub top_k: Option<usize>,
    /// Minimum similarity
    pub threshold: Option<f32>,
}

/// A product with its similarity to the query
#[derive(Debug, Serialize)]
pub struct ProductResult {
    /// Product fields, inlined
    #[serde(flatten)]
    pub product: ProductRecord,
    /// Cosine similarity
    pub similarity: f32,
    /// Similarity as a percentage
    pub similarity_percent: f32,
}

impl From<SearchHit<ProductRecord>> for ProductResult {
    fn from(hit: SearchHit<ProductRecord>) -> Self {
        let similarity_percent = hit.score_percent();
        Self {
            product: hit.metadata,
            similarity: hit.score,
            similarity_percent,
        }
    }
}

/// Response of every search endpoint
///
/// Failures keep the same shape: empty `results` and an `error` message.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Ranked results
    pub results: Vec<ProductResult>,
    /// Number of results
    pub total: usize,
    /// What went wrong, when something did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Successful response
    pub fn from_hits(hits: Vec<SearchHit<ProductRecord>>) -> Self {
        let results: Vec<ProductResult> = hits.into_iter().map(ProductResult::from).collect();
        Self {
            total: results.len(),
            results,
            error: None,
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            error: Some(message.into()),
        }
    }
}

/// Product listing
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    /// Products, in catalog order
    pub products: Vec<ProductRecord>,
    /// Number of products
    pub total: usize,
}

/// Health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the server answers
    pub status: &'static str,
    /// Records in the loaded store
    pub products: usize,
    /// Store dimension, 0 when empty
    pub dimension: usize,
    /// Similarity backend of the store
    pub index: String,
    /// Embedding provider used for queries
    pub embedding_provider: String,
}

/// Error body of non-search endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
