//! Fixture store and embedding providers for handler tests

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rocket::local::asynchronous::Client;
use vitrine_application::use_cases::QueryService;
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::EmbeddingProvider;
use vitrine_domain::{Embedding, EmbeddingInput, ProductRecord, VectorStore};
use vitrine_providers::BruteForceIndex;
use vitrine_server::{SearchDefaults, SearchState, search_rocket};

/// Text maps to the first axis, an image to the second, both to their sum
pub struct AxisEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for AxisEmbeddingProvider {
    async fn embed(&self, input: &EmbeddingInput) -> Result<Embedding> {
        input.validate()?;
        let text = if input.text.is_some() { 1.0 } else { 0.0 };
        let image = if input.image.is_some() { 1.0 } else { 0.0 };
        Ok(Embedding::new(vec![text, image, 0.0], "axis"))
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn model(&self) -> &str {
        "axis"
    }

    fn provider_name(&self) -> &str {
        "axis"
    }
}

/// Provider whose service is down
pub struct UnavailableEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for UnavailableEmbeddingProvider {
    async fn embed(&self, _input: &EmbeddingInput) -> Result<Embedding> {
        Err(Error::embedding("service unavailable (503)"))
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn model(&self) -> &str {
        "unavailable"
    }

    fn provider_name(&self) -> &str {
        "unavailable"
    }
}

fn product(id: &str, name: &str, category: &str) -> ProductRecord {
    let mut product = ProductRecord::new(id, name, category);
    product.detail_url = format!("https://shop.example/products_detail/{id}");
    product.description = format!("{name} for the office");
    product
}

/// Four products: two desks along the text axis, a chair along the image
/// axis (with an image on disk) and a cabinet on its own axis
pub fn fixture_store(image_dir: &Path) -> VectorStore<ProductRecord> {
    let image_path = image_dir.join("3.jpg");
    std::fs::write(&image_path, b"chair-image-bytes").unwrap();

    let mut chair = product("3", "Chair A", "Chairs");
    chair.local_image_path = Some(image_path.to_string_lossy().into_owned());

    let mut store = VectorStore::new(Box::new(BruteForceIndex::new()));
    store.add(&[1.0, 0.0, 0.0], product("1", "Desk A", "Desks")).unwrap();
    store.add(&[0.9, 0.1, 0.0], product("2", "Desk B", "Desks")).unwrap();
    store.add(&[0.0, 1.0, 0.0], chair).unwrap();
    store.add(&[0.0, 0.0, 1.0], product("4", "Cabinet", "Storage")).unwrap();
    store
}

pub async fn client_with(
    store: VectorStore<ProductRecord>,
    provider: Arc<dyn EmbeddingProvider>,
) -> Client {
    let state = SearchState {
        service: Arc::new(QueryService::new(Arc::new(store), provider)),
        defaults: SearchDefaults::default(),
    };
    Client::tracked(search_rocket(state))
        .await
        .expect("valid rocket instance")
}

pub async fn client(image_dir: &Path) -> Client {
    client_with(fixture_store(image_dir), Arc::new(AxisEmbeddingProvider)).await
}

pub async fn json_body(
    response: rocket::local::asynchronous::LocalResponse<'_>,
) -> serde_json::Value {
    let body = response.into_string().await.expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}
