use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Embedding, EmbeddingInput};

/// Multimodal Embedding Interface
///
/// Turns a (text, image) pair into a vector of a fixed dimension. Remote
/// services, local models and test doubles all sit behind this trait.
///
/// # Example
///
/// ```ignore
/// use vitrine_domain::ports::providers::EmbeddingProvider;
/// use vitrine_domain::value_objects::EmbeddingInput;
///
/// let embedding = provider.embed(&EmbeddingInput::text("white standing desk")).await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed the given input
    ///
    /// # Errors
    /// `InvalidArgument` when the input carries neither text nor image,
    /// `Embedding` when the call does not succeed.
    async fn embed(&self, input: &EmbeddingInput) -> Result<Embedding>;

    /// Dimension of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Model identifier recorded in run summaries
    fn model(&self) -> &str;

    /// Name of this provider implementation (e.g. "titan", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed(&EmbeddingInput::text("health check")).await?;
        Ok(())
    }
}
