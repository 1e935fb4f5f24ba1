//! Null embedding provider for testing and development
//!
//! Deterministic embeddings derived from a SHA-256 digest of the input.
//! Always works offline. Equal inputs give equal unit vectors; different
//! inputs give unrelated ones.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use vitrine_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use vitrine_domain::error::Result;
use vitrine_domain::ports::providers::EmbeddingProvider;
use vitrine_domain::value_objects::{Embedding, EmbeddingInput};

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use vitrine_domain::ports::providers::EmbeddingProvider;
/// use vitrine_providers::embedding::NullEmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new(8);
/// assert_eq!(provider.dimensions(), 8);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a provider producing vectors of `dimensions` components
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    #[allow(clippy::cast_precision_loss)]
    fn vector_for(&self, input: &EmbeddingInput) -> Vec<f32> {
        let mut hasher = Sha256::new();
        if let Some(text) = &input.text {
            hasher.update(b"text:");
            hasher.update(text.as_bytes());
        }
        if let Some(image) = &input.image {
            hasher.update(b"image:");
            hasher.update(image);
        }
        let seed = hasher.finalize();

        let mut vector = Vec::with_capacity(self.dimensions);
        let mut block_index: u64 = 0;
        while vector.len() < self.dimensions {
            let block = Sha256::new()
                .chain_update(seed)
                .chain_update(block_index.to_le_bytes())
                .finalize();
            for chunk in block.chunks_exact(4) {
                if vector.len() == self.dimensions {
                    break;
                }
                let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                vector.push(raw as f32 / u32::MAX as f32 * 2.0 - 1.0);
            }
            block_index += 1;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSION_NULL)
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, input: &EmbeddingInput) -> Result<Embedding> {
        input.validate()?;
        Ok(Embedding::new(self.vector_for(input), "null"))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        "null"
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
    if dimensions == 0 {
        return Err("Null provider needs a positive dimension".to_string());
    }
    Ok(Arc::new(NullEmbeddingProvider::new(dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
