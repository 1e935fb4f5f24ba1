use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ProductRecord;

/// Remote product catalog
///
/// Pagination, pacing and retries belong to the implementation. Per-page and
/// per-product failures are reported as empty results, not errors, so one bad
/// page does not stop an ingestion run.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Detail page locators listed on a catalog page, in page order
    async fn list_page(&self, page: u32) -> Result<Vec<String>>;

    /// Fetch and parse one product detail page
    async fn fetch_product(&self, detail_url: &str) -> Result<Option<ProductRecord>>;

    /// Download the product image into `dir`, returning the saved path
    async fn download_image(&self, product: &ProductRecord, dir: &Path)
    -> Result<Option<PathBuf>>;
}
