//! Configuration types

mod app;
mod embedding;
mod logging;
mod scraper;
mod server;
mod storage;

pub use app::AppConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use scraper::ScraperConfig;
pub use server::ServerConfig;
pub use storage::{SearchConfig, StorageConfig};
