//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file and environment
//! variables, in that order of precedence (later sources win).

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use url::Url;
use vitrine_domain::constants::MAX_TOP_K;
use vitrine_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order:
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML file: the explicit path, or `vitrine.toml` found in a default location
    /// 3. Environment variables with prefix, nested with `__`
    ///    (e.g., `VITRINE_EMBEDDING__MODEL`)
    ///
    /// # Errors
    /// `Configuration` when an explicit file is missing, a source does not
    /// parse, or a value fails validation.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails on the first section holding an unusable value.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_server_config(config)?;
    validate_scraper_config(config)?;
    validate_embedding_config(config)?;
    validate_search_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_scraper_config(config: &AppConfig) -> Result<()> {
    let scraper = &config.scraper;
    validate_url("scraper.base_url", &scraper.base_url)?;
    if scraper.start_page == 0 {
        return Err(Error::configuration("Scraper start page must be at least 1"));
    }
    if scraper.total_pages == 0 {
        return Err(Error::configuration("Scraper total pages must be at least 1"));
    }
    if scraper.detail_marker.is_empty() {
        return Err(Error::configuration("Scraper detail marker cannot be empty"));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.provider.trim().is_empty() {
        return Err(Error::configuration("Embedding provider cannot be empty"));
    }
    if embedding.dimensions == 0 {
        return Err(Error::configuration(
            "Embedding dimensions must be at least 1",
        ));
    }
    if embedding.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    if let Some(base_url) = &embedding.base_url {
        validate_url("embedding.base_url", base_url)?;
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.top_k == 0 || search.top_k > MAX_TOP_K {
        return Err(Error::configuration(format!(
            "Search top_k must be between 1 and {MAX_TOP_K}, got {}",
            search.top_k
        )));
    }
    if !(-1.0..=1.0).contains(&search.similarity_threshold) {
        return Err(Error::configuration(format!(
            "Similarity threshold must be within [-1, 1], got {}",
            search.similarity_threshold
        )));
    }
    Ok(())
}

fn validate_url(key: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .config_context(format!("{key} is not a valid URL ('{value}')"))
}
