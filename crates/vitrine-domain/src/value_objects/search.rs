//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Hit
///
/// Metadata of a stored record together with the similarity computed for the
/// current query. The score is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit<M> {
    /// Metadata of the matched record
    pub metadata: M,
    /// Cosine similarity in `[-1, 1]`, higher is better
    pub score: f32,
}

impl<M> SearchHit<M> {
    /// Similarity expressed as a percentage, as shown to users
    pub fn score_percent(&self) -> f32 {
        self.score * 100.0
    }
}

/// A similarity score attached to an internal slot of a vector index
///
/// Slots are insertion positions. They only travel between a
/// [`VectorStore`](crate::VectorStore) and its index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSlot {
    /// Insertion position inside the index
    pub slot: usize,
    /// Similarity to the query
    pub score: f32,
}
