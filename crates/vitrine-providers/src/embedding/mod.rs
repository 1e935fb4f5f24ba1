//! Embedding Provider Implementations
//!
//! | Provider | Use Case |
//! |----------|----------|
//! | [`TitanEmbeddingProvider`] | Managed multimodal model over HTTP |
//! | [`NullEmbeddingProvider`] | Offline development and tests |

pub mod helpers;
pub mod null;
pub mod titan;

pub use null::NullEmbeddingProvider;
pub use titan::TitanEmbeddingProvider;
