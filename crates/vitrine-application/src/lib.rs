//! Application Layer - Vitrine
//!
//! Use cases orchestrating the domain ports:
//!
//! - [`CatalogIngestionService`]: walks the remote catalog and downloads images
//! - [`BatchEmbeddingService`]: embeds every product, degrading failures to zero vectors
//! - [`QueryService`]: answers text, image and "more like this" queries over a loaded store
//!
//! Providers are not a dependency of this crate. They register themselves in
//! the [`ports::registry`] slices and are resolved by name at startup.

pub mod ports;
pub mod use_cases;

pub use ports::registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use use_cases::*;
