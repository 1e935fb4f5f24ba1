//! Provider ports
//!
//! Traits implemented by the provider crate and consumed by the
//! application layer.

mod catalog;
mod embedding;
mod vector_index;

pub use catalog::CatalogSource;
pub use embedding::EmbeddingProvider;
pub use vector_index::VectorIndex;
