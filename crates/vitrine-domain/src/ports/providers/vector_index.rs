use crate::value_objects::ScoredSlot;

/// Similarity and ranking backend behind a [`VectorStore`](crate::VectorStore)
///
/// The store owns dimension checks and metadata; an index only keeps vectors
/// in insertion order and ranks them against a query. Swapping the brute-force
/// scan for an approximate index means providing another implementation of
/// this trait.
///
/// # Contract
///
/// - `insert` is only called with vectors of the store's dimension.
/// - `query` returns at most `k` slots sorted by descending score, ties broken
///   by ascending slot.
/// - A zero-norm vector on either side scores `0.0`, never NaN.
pub trait VectorIndex: Send + Sync {
    /// Append a vector; its slot is the number of vectors inserted before it
    fn insert(&mut self, vector: &[f32]);

    /// Rank stored vectors against `query`
    fn query(&self, query: &[f32], k: usize) -> Vec<ScoredSlot>;

    /// Vector stored at `slot`
    fn vector(&self, slot: usize) -> Option<&[f32]>;

    /// Number of stored vectors
    fn len(&self) -> usize;

    /// Whether the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the backend, for logs and stats
    fn name(&self) -> &str;
}
