//! Data file locations and query defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vitrine_domain::constants::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_EMBEDDINGS_FILE, DEFAULT_IMAGES_DIR, DEFAULT_PRODUCTS_FILE,
    DEFAULT_SUMMARY_FILE,
};

/// Where the pipeline reads and writes its files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root data directory
    pub data_dir: PathBuf,
    /// Downloaded product images
    pub images_dir: PathBuf,
    /// Product metadata (JSON array)
    pub products_file: PathBuf,
    /// Vector matrix (`.npy`)
    pub embeddings_file: PathBuf,
    /// Summary of the last embedding pass (JSON)
    pub summary_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            embeddings_file: PathBuf::from(DEFAULT_EMBEDDINGS_FILE),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
        }
    }
}

/// Query defaults applied by the front-ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results per query when the caller does not say
    pub top_k: usize,
    /// Hits scoring below this are dropped
    pub similarity_threshold: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
