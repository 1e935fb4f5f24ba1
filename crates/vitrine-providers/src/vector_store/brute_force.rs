//! Brute-Force Similarity Index
//!
//! Exact O(N·D) cosine scan over a contiguous row-major matrix. Sufficient
//! for catalogs of tens to low thousands of products.

use std::cmp::Ordering;

use vitrine_domain::ports::providers::VectorIndex;
use vitrine_domain::value_objects::ScoredSlot;

/// Brute-force cosine similarity index
///
/// Vectors are kept in one flat buffer with their norms cached at insert
/// time, so a query costs one dot product per stored vector.
#[derive(Debug, Clone, Default)]
pub struct BruteForceIndex {
    data: Vec<f32>,
    norms: Vec<f32>,
    dimension: usize,
}

impl BruteForceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `capacity` vectors of `dimension`
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(dimension * capacity),
            norms: Vec::with_capacity(capacity),
            dimension,
        }
    }

    fn row(&self, slot: usize) -> &[f32] {
        let start = slot * self.dimension;
        &self.data[start..start + self.dimension]
    }
}

impl VectorIndex for BruteForceIndex {
    fn insert(&mut self, vector: &[f32]) {
        if self.norms.is_empty() {
            self.dimension = vector.len();
        }
        debug_assert_eq!(vector.len(), self.dimension, "index dimension is fixed");
        self.data.extend_from_slice(vector);
        self.norms.push(norm(vector));
    }

    fn query(&self, query: &[f32], k: usize) -> Vec<ScoredSlot> {
        if k == 0 || self.norms.is_empty() || query.len() != self.dimension {
            return Vec::new();
        }

        let query_norm = norm(query);
        let mut results: Vec<ScoredSlot> = self
            .norms
            .iter()
            .enumerate()
            .map(|(slot, &row_norm)| ScoredSlot {
                slot,
                score: cosine_similarity(query, self.row(slot), query_norm, row_norm),
            })
            .collect();

        // Score descending, then insertion order ascending
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.slot.cmp(&b.slot))
        });

        results.truncate(k);
        results
    }

    fn vector(&self, slot: usize) -> Option<&[f32]> {
        (slot < self.norms.len()).then(|| self.row(slot))
    }

    fn len(&self) -> usize {
        self.norms.len()
    }

    fn name(&self) -> &str {
        "brute-force"
    }
}

fn norm(vector: &[f32]) -> f32 {
    vector.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed norms
///
/// A zero norm on either side scores 0. The result is clamped to `[-1, 1]`
/// to absorb rounding.
fn cosine_similarity(a: &[f32], b: &[f32], norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let similarity = dot / (norm_a * norm_b);
    if similarity.is_finite() {
        similarity.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
