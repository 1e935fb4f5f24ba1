//! Value objects shared across layers

mod embedding;
mod product;
mod search;
mod summary;

pub use embedding::{Embedding, EmbeddingInput};
pub use product::ProductRecord;
pub use search::{ScoredSlot, SearchHit};
pub use summary::{RunSummary, StoreStats};
