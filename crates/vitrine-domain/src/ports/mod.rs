//! Ports (interfaces) of the domain

pub mod providers;

pub use providers::{CatalogSource, EmbeddingProvider, VectorIndex};
