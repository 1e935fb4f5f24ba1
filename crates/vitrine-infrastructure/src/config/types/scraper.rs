//! Catalog scraper configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CATALOG_BASE_URL, DEFAULT_CATALOG_DETAIL_MARKER, DEFAULT_CATALOG_LIST_PATH,
    DEFAULT_REQUEST_DELAY_MS, DEFAULT_SCRAPER_TIMEOUT_SECS, DEFAULT_START_PAGE,
    DEFAULT_TOTAL_PAGES, DEFAULT_USER_AGENT,
};

/// Catalog scraper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Storefront root URL
    pub base_url: String,
    /// Path prefix of list pages; the page number is appended
    pub list_path: String,
    /// Substring identifying product detail links
    pub detail_marker: String,
    /// First list page
    pub start_page: u32,
    /// Number of list pages to walk
    pub total_pages: u32,
    /// Pause before every request, in milliseconds
    pub request_delay_ms: u64,
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ScraperConfig {
    /// Last list page, inclusive
    pub fn end_page(&self) -> u32 {
        self.start_page
            .saturating_add(self.total_pages.saturating_sub(1))
    }

    /// Pause before every request
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            list_path: DEFAULT_CATALOG_LIST_PATH.to_string(),
            detail_marker: DEFAULT_CATALOG_DETAIL_MARKER.to_string(),
            start_page: DEFAULT_START_PAGE,
            total_pages: DEFAULT_TOTAL_PAGES,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            timeout_secs: DEFAULT_SCRAPER_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
