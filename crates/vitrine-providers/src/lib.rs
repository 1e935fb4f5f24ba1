//! # Vitrine - Provider Implementations
//!
//! Implementations of the ports defined in `vitrine-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Similarity index | `VectorIndex` | BruteForce |
//! | Embedding | `EmbeddingProvider` | Titan, Null |
//! | Catalog | `CatalogSource` | HttpCatalogScraper |
//!
//! Persistence of a loaded store (`.npy` vectors plus JSON metadata) lives
//! in [`persistence`].
//!
//! Embedding providers register themselves in the application registry, so
//! linking this crate is enough to make them resolvable by name.

pub use vitrine_domain::error::{Error, Result};
pub use vitrine_domain::ports::providers::{CatalogSource, EmbeddingProvider, VectorIndex};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Similarity index implementations
pub mod vector_store;

/// Catalog source implementations
pub mod catalog;

/// Vector and metadata file formats
pub mod persistence;

pub use catalog::HttpCatalogScraper;
pub use embedding::{NullEmbeddingProvider, TitanEmbeddingProvider};
pub use vector_store::BruteForceIndex;
