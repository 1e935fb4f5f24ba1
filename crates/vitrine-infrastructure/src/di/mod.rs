//! Composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into live providers and
//! use cases.

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app};
pub use provider_resolvers::{
    CatalogSourceResolver, EmbeddingProviderResolver, embedding_config_to_registry,
    scraper_config_to_catalog,
};
