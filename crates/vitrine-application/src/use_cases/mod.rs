//! Use Cases
//!
//! Application services orchestrating the domain ports.

pub mod batch_embedding;
pub mod catalog_ingestion;
pub mod query_service;

pub use batch_embedding::{BatchEmbeddingService, EmbeddingBatch};
pub use catalog_ingestion::{CatalogIngestionService, IngestionOptions, IngestionOutcome};
pub use query_service::QueryService;
