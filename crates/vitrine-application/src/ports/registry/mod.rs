//! Provider Registry System
//!
//! Provider crates register entries with `#[linkme::distributed_slice]`;
//! the infrastructure layer resolves them by the name found in configuration.
//!
//! ```ignore
//! use vitrine_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "null",
//!     description: "Deterministic offline embeddings",
//!     factory: |config| Ok(Arc::new(NullEmbeddingProvider::from_config(config))),
//! };
//! ```

pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
