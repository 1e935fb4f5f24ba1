//! Catalog Ingestion Use Case
//!
//! Walks the paginated remote catalog through a [`CatalogSource`] and
//! downloads product images. Pacing and retries are the source's concern;
//! this service only decides which pages to visit and drops duplicates.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use async_stream::stream;
use futures::{Stream, StreamExt};
use tracing::{debug, info, warn};

use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::CatalogSource;
use vitrine_domain::value_objects::ProductRecord;

/// Pages to visit and where to put images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionOptions {
    /// First catalog page (1-based)
    pub start_page: u32,
    /// Last catalog page, inclusive
    pub end_page: u32,
    /// Directory receiving downloaded images
    pub images_dir: PathBuf,
}

impl IngestionOptions {
    /// Reject empty or zero-based page ranges
    pub fn validate(&self) -> Result<()> {
        if self.start_page == 0 {
            return Err(Error::invalid_argument("Catalog pages start at 1"));
        }
        if self.end_page < self.start_page {
            return Err(Error::invalid_argument(format!(
                "End page {} is before start page {}",
                self.end_page, self.start_page
            )));
        }
        Ok(())
    }
}

/// Result of a full ingestion run
#[derive(Debug, Clone, Default)]
pub struct IngestionOutcome {
    /// Every product found, in catalog order
    pub products: Vec<ProductRecord>,
    /// Number of products whose image was saved locally
    pub images_downloaded: usize,
}

/// Catalog ingestion service
pub struct CatalogIngestionService {
    source: Arc<dyn CatalogSource>,
    options: IngestionOptions,
}

impl CatalogIngestionService {
    /// Create the service
    ///
    /// # Errors
    /// `InvalidArgument` when the page range is invalid.
    pub fn new(source: Arc<dyn CatalogSource>, options: IngestionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { source, options })
    }

    /// Ingestion options in use
    pub fn options(&self) -> &IngestionOptions {
        &self.options
    }

    /// The catalog as a lazy stream of products
    ///
    /// Nothing is fetched until the stream is polled. Each call starts a new
    /// walk from the first page. Detail pages listed more than once, and
    /// products whose identifier was already yielded, are skipped. A page or
    /// product that fails is logged and skipped.
    pub fn products(&self) -> impl Stream<Item = ProductRecord> + Send + 'static {
        let source = Arc::clone(&self.source);
        let (start, end) = (self.options.start_page, self.options.end_page);

        stream! {
            let mut seen_links = HashSet::new();
            let mut seen_ids = HashSet::new();

            for page in start..=end {
                let links = match source.list_page(page).await {
                    Ok(links) => links,
                    Err(e) => {
                        warn!(page, error = %e, "Failed to list catalog page");
                        continue;
                    }
                };
                info!(page, links = links.len(), "Listed catalog page");

                for link in links {
                    if !seen_links.insert(link.clone()) {
                        continue;
                    }
                    match source.fetch_product(&link).await {
                        Ok(Some(product)) => {
                            if seen_ids.insert(product.product_id.clone()) {
                                debug!(product_id = %product.product_id, "Fetched product");
                                yield product;
                            }
                        }
                        Ok(None) => debug!(url = %link, "Detail page had no product"),
                        Err(e) => warn!(url = %link, error = %e, "Failed to fetch product"),
                    }
                }
            }
        }
    }

    /// Collect every product and download its image
    ///
    /// Products whose image cannot be downloaded are kept without a local
    /// image; the embedding pass records them as failures.
    ///
    /// # Errors
    /// `Io` when the image directory cannot be created.
    pub async fn run(&self) -> Result<IngestionOutcome> {
        let images_dir = &self.options.images_dir;
        tokio::fs::create_dir_all(images_dir).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to create image directory {}", images_dir.display()),
                e,
            )
        })?;

        let mut outcome = IngestionOutcome::default();
        let mut products = std::pin::pin!(self.products());

        while let Some(mut product) = products.next().await {
            match self.source.download_image(&product, images_dir).await {
                Ok(Some(path)) => {
                    product.local_image_path = Some(path.to_string_lossy().into_owned());
                    outcome.images_downloaded += 1;
                }
                Ok(None) => debug!(product_id = %product.product_id, "No image downloaded"),
                Err(e) => {
                    warn!(product_id = %product.product_id, error = %e, "Image download failed");
                }
            }
            outcome.products.push(product);
        }

        info!(
            products = outcome.products.len(),
            images = outcome.images_downloaded,
            "Catalog ingestion complete"
        );
        Ok(outcome)
    }
}
