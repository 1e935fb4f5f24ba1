//! Similarity Index Implementations
//!
//! | Index | Use Case |
//! |-------|----------|
//! | [`BruteForceIndex`] | Exact cosine scan for catalogs up to a few thousand items |

pub mod brute_force;

pub use brute_force::BruteForceIndex;
