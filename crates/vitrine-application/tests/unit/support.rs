//! Test doubles for the domain ports

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::{CatalogSource, EmbeddingProvider};
use vitrine_domain::{Embedding, EmbeddingInput, ProductRecord};

/// Embedding provider keyed on the leading part of the input text
///
/// The key is the text up to the first `" - "`, i.e. the product name for
/// batch inputs and the whole query for text searches.
pub struct MockEmbeddingProvider {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<EmbeddingInput>>,
}

impl MockEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: HashMap::new(),
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_vector(mut self, key: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(key.to_string(), vector);
        self
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub fn calls(&self) -> Vec<EmbeddingInput> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn key(input: &EmbeddingInput) -> String {
        input
            .text
            .as_deref()
            .map(|t| t.split(" - ").next().unwrap_or(t).to_string())
            .unwrap_or_else(|| "<image>".to_string())
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, input: &EmbeddingInput) -> Result<Embedding> {
        input.validate()?;
        self.calls.lock().expect("calls lock").push(input.clone());

        let key = Self::key(input);
        if self.failing.contains(&key) {
            return Err(Error::embedding(format!("mock failure for {key}")));
        }
        let vector = self
            .vectors
            .get(&key)
            .cloned()
            .unwrap_or_else(|| vec![1.0; self.dimensions]);
        Ok(Embedding::new(vector, "mock-model"))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

/// Provider whose every call fails, like an unreachable service
pub struct FailingEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for FailingEmbeddingProvider {
    async fn embed(&self, _input: &EmbeddingInput) -> Result<Embedding> {
        Err(Error::embedding("service unavailable"))
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn model(&self) -> &str {
        "unavailable"
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// In-memory catalog
#[derive(Default)]
pub struct FakeCatalog {
    pages: HashMap<u32, Vec<String>>,
    products: HashMap<String, ProductRecord>,
    failing_pages: HashSet<u32>,
    list_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page listing the given product ids
    pub fn page(mut self, page: u32, ids: &[&str]) -> Self {
        let links = ids.iter().map(|id| detail_url(id)).collect();
        self.pages.insert(page, links);
        for id in ids {
            self.products
                .entry(detail_url(id))
                .or_insert_with(|| product(id, &format!("Product {id}"), "Chairs"));
        }
        self
    }

    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn without_image(mut self, id: &str) -> Self {
        if let Some(product) = self.products.get_mut(&detail_url(id)) {
            product.image_url = None;
        }
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn list_page(&self, page: u32) -> Result<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_pages.contains(&page) {
            return Err(Error::scrape(format!("page {page} unavailable")));
        }
        Ok(self.pages.get(&page).cloned().unwrap_or_default())
    }

    async fn fetch_product(&self, detail_url: &str) -> Result<Option<ProductRecord>> {
        Ok(self.products.get(detail_url).cloned())
    }

    async fn download_image(
        &self,
        product: &ProductRecord,
        dir: &Path,
    ) -> Result<Option<PathBuf>> {
        if product.image_url.is_none() {
            return Ok(None);
        }
        let path = dir.join(format!("{}.jpg", product.product_id));
        tokio::fs::write(&path, b"\xFF\xD8\xFFfake").await?;
        Ok(Some(path))
    }
}

pub fn detail_url(id: &str) -> String {
    format!("https://shop.example/products_detail/{id}")
}

pub fn product(id: &str, name: &str, category: &str) -> ProductRecord {
    let mut record = ProductRecord::new(id, name, category);
    record.detail_url = detail_url(id);
    record.image_url = Some(format!("https://shop.example/upload/products/{id}.jpg"));
    record
}
