//! Domain layer constants

/// Characters of the product description included in the embedding text
pub const EMBEDDING_DESCRIPTION_CHARS: usize = 200;

/// Default number of results returned by a search
pub const DEFAULT_TOP_K: usize = 12;

/// Upper bound on results a single query may request
pub const MAX_TOP_K: usize = 50;

/// Default minimum similarity for front-end results
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.5;
