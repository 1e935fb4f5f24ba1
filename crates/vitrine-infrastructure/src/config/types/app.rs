//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{
    EmbeddingConfig, LoggingConfig, ScraperConfig, SearchConfig, ServerConfig, StorageConfig,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP front-end configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog scraper configuration
    #[serde(default)]
    pub scraper: ScraperConfig,
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Data file locations
    #[serde(default)]
    pub storage: StorageConfig,
    /// Query defaults
    #[serde(default)]
    pub search: SearchConfig,
}
