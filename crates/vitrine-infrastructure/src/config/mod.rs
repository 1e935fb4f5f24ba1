//! Configuration
//!
//! [`AppConfig`] sections, loaded by [`loader::ConfigLoader`] from defaults,
//! an optional TOML file and `VITRINE_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, EmbeddingConfig, LoggingConfig, ScraperConfig, SearchConfig, ServerConfig,
    StorageConfig,
};
