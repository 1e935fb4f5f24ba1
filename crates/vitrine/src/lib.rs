//! # Vitrine
//!
//! Visual and text similarity search over a furniture catalog: scrape the
//! catalog, embed every product (text and image together), keep the vectors
//! in an in-memory store and answer top-k cosine similarity queries from a
//! web page.
//!
//! ## Pipeline
//!
//! ```text
//! vitrine scrape  → data/products.json + data/images/
//! vitrine embed   → data/embeddings.npy + data/embeddings_metadata.json
//! vitrine serve   → http://127.0.0.1:8501
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use vitrine::domain::VectorStore;
//! use vitrine::providers::BruteForceIndex;
//!
//! let mut store = VectorStore::new(Box::new(BruteForceIndex::new()));
//! store.add(&[1.0, 0.0], "chair-A")?;
//! store.add(&[0.0, 1.0], "chair-B")?;
//! let hits = store.search(&[0.9, 0.1], 1)?;
//! assert_eq!(hits[0].metadata, "chair-A");
//! ```

pub mod cli;

/// Domain layer - vector store, value objects and ports
pub mod domain {
    pub use vitrine_domain::*;
}

/// Application layer - ingestion, batch embedding and query use cases
pub mod application {
    pub use vitrine_application::*;
}

/// Provider implementations - similarity index, embedding, scraper, persistence
pub mod providers {
    pub use vitrine_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use vitrine_infrastructure::*;
}

/// HTTP front-end
pub mod server {
    pub use vitrine_server::*;
}
