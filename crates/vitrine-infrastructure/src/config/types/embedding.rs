//! Embedding provider configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitrine_providers::constants::{
    DEFAULT_EMBEDDING_TIMEOUT_SECS, EMBEDDING_DIMENSION_TITAN, TITAN_DEFAULT_MODEL,
    TITAN_DEFAULT_REGION,
};

use crate::constants::{DEFAULT_BATCH_DELAY_MS, DEFAULT_EMBEDDING_PROVIDER};

/// Embedding provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Registered provider name ("titan", "null")
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Cloud region; derives the endpoint when `base_url` is unset
    pub region: String,
    /// Explicit API endpoint
    pub base_url: Option<String>,
    /// Bearer token
    pub api_key: Option<String>,
    /// Output embedding length
    pub dimensions: usize,
    /// Pause between calls of a batch, in milliseconds
    pub batch_delay_ms: u64,
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
}

impl EmbeddingConfig {
    /// Pause between calls of a batch
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: TITAN_DEFAULT_MODEL.to_string(),
            region: TITAN_DEFAULT_REGION.to_string(),
            base_url: None,
            api_key: None,
            dimensions: EMBEDDING_DIMENSION_TITAN,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

// The API key never reaches the logs.
impl std::fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("dimensions", &self.dimensions)
            .field("batch_delay_ms", &self.batch_delay_ms)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
