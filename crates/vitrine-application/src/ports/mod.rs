//! Application ports
//!
//! Provider traits live in `vitrine-domain`; this module adds the registry
//! through which provider implementations are discovered.

/// Provider registry for dynamic provider discovery
pub mod registry;

pub use vitrine_domain::ports::providers::{CatalogSource, EmbeddingProvider, VectorIndex};
