//! HTTP catalog scraper
//!
//! Implements the CatalogSource port against a storefront whose list pages
//! live at `{base_url}{list_path}{page}` and whose product pages are linked
//! with a recognizable marker in the URL.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::CatalogSource;
use vitrine_domain::value_objects::ProductRecord;

use crate::catalog::parser::{CatalogPageParser, image_extension};

/// Settings of an [`HttpCatalogScraper`]
#[derive(Debug, Clone)]
pub struct CatalogScraperConfig {
    /// Storefront root, e.g. `https://www.u-chance.com.tw`
    pub base_url: String,
    /// Path prefix of list pages; the page number is appended
    pub list_path: String,
    /// Substring identifying product detail links
    pub detail_marker: String,
    /// Pause before every request
    pub request_delay: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Catalog source scraping a storefront over HTTP
pub struct HttpCatalogScraper {
    client: Client,
    base_url: Url,
    list_path: String,
    request_delay: Duration,
    parser: CatalogPageParser,
}

impl HttpCatalogScraper {
    /// Create a scraper
    ///
    /// # Errors
    /// `Configuration` when the base URL does not parse or the HTTP client
    /// cannot be built; `Scrape` for an unusable detail marker.
    pub fn new(config: CatalogScraperConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::configuration(format!("Invalid catalog base URL '{}': {e}", config.base_url))
        })?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            list_path: config.list_path,
            request_delay: config.request_delay,
            parser: CatalogPageParser::new(&config.detail_marker)?,
        })
    }

    /// URL of a list page
    pub fn list_page_url(&self, page: u32) -> Result<Url> {
        self.base_url
            .join(&format!("{}{page}", self.list_path))
            .map_err(|e| Error::scrape(format!("Invalid list page URL for page {page}: {e}")))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::network_with_source(format!("GET {url} failed"), e))
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| Error::network_with_source(format!("Reading {url} failed"), e))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogScraper {
    async fn list_page(&self, page: u32) -> Result<Vec<String>> {
        let url = self.list_page_url(page)?;
        match self.get_text(url.as_str()).await {
            Ok(html) => {
                let links = self.parser.product_links(&html, &self.base_url);
                debug!(page, links = links.len(), "Parsed list page");
                Ok(links)
            }
            Err(e) => {
                warn!(page, url = %url, error = %e, "Failed to fetch list page");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_product(&self, detail_url: &str) -> Result<Option<ProductRecord>> {
        match self.get_text(detail_url).await {
            Ok(html) => Ok(self.parser.product(&html, detail_url)),
            Err(e) => {
                warn!(url = %detail_url, error = %e, "Failed to fetch product page");
                Ok(None)
            }
        }
    }

    async fn download_image(
        &self,
        product: &ProductRecord,
        dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let Some(image_url) = product.image_url.as_deref() else {
            return Ok(None);
        };

        let bytes = match self.get(image_url).await {
            Ok(response) => response.bytes().await,
            Err(e) => {
                warn!(product_id = %product.product_id, error = %e, "Failed to download image");
                return Ok(None);
            }
        };
        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(product_id = %product.product_id, error = %e, "Failed to read image body");
                return Ok(None);
            }
        };

        let path = dir.join(format!(
            "{}{}",
            product.product_id,
            image_extension(image_url)
        ));
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write image {}", path.display()), e)
        })?;
        debug!(product_id = %product.product_id, path = %path.display(), "Saved image");
        Ok(Some(path))
    }
}
