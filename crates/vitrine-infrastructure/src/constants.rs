//! Infrastructure layer constants
//!
//! Defaults of the configuration sections. Domain constants live in
//! `vitrine_domain::constants`; provider constants in
//! `vitrine_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vitrine.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vitrine";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VITRINE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "VITRINE_LOG";

/// File name stem used when the log path has none
pub const LOG_FILE_STEM: &str = "vitrine";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8501;

// ============================================================================
// CATALOG SCRAPER CONSTANTS
// ============================================================================

/// Storefront root
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.u-chance.com.tw";

/// Path prefix of list pages
pub const DEFAULT_CATALOG_LIST_PATH: &str = "/products/all/";

/// Substring identifying product detail links
pub const DEFAULT_CATALOG_DETAIL_MARKER: &str = "products_detail";

/// First list page
pub const DEFAULT_START_PAGE: u32 = 1;

/// Number of list pages walked
pub const DEFAULT_TOTAL_PAGES: u32 = 2;

/// Pause before each catalog request in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1500;

/// Catalog request timeout in seconds
pub const DEFAULT_SCRAPER_TIMEOUT_SECS: u64 = 10;

/// User agent sent to the storefront
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "titan";

/// Pause between embedding calls of a batch in milliseconds
pub const DEFAULT_BATCH_DELAY_MS: u64 = 100;

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Data directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Downloaded product images
pub const DEFAULT_IMAGES_DIR: &str = "data/images";

/// Scraped product list
pub const DEFAULT_PRODUCTS_FILE: &str = "data/products.json";

/// Vector matrix
pub const DEFAULT_EMBEDDINGS_FILE: &str = "data/embeddings.npy";

/// Summary of the last embedding pass
pub const DEFAULT_SUMMARY_FILE: &str = "data/embeddings_metadata.json";
