//! Titan Multimodal Embedding Provider
//!
//! Implements the EmbeddingProvider port over the model invocation endpoint
//! of a managed runtime hosting `amazon.titan-embed-image-v1`. Text, image
//! or both are embedded into one vector of 256, 384 or 1024 components.
//!
//! Authentication is a bearer API key. Request signing with cloud
//! credentials is not supported; point `base_url` at a gateway when needed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde_json::{Value, json};

use vitrine_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::ports::providers::EmbeddingProvider;
use vitrine_domain::value_objects::{Embedding, EmbeddingInput};

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_TITAN, TITAN_DEFAULT_MODEL, TITAN_DEFAULT_REGION,
    TITAN_SUPPORTED_DIMENSIONS,
};
use crate::embedding::helpers::{DEFAULT_EMBEDDING_TIMEOUT, constructor};
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "Titan";

/// Titan multimodal embedding provider
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use vitrine_providers::embedding::TitanEmbeddingProvider;
///
/// let provider = TitanEmbeddingProvider::new(
///     Some("bedrock-api-key".to_string()),
///     None,
///     "us-east-1",
///     "amazon.titan-embed-image-v1".to_string(),
///     1024,
///     Duration::from_secs(30),
///     reqwest::Client::new(),
/// );
/// ```
pub struct TitanEmbeddingProvider {
    api_key: Option<String>,
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl TitanEmbeddingProvider {
    /// Create a new Titan embedding provider
    ///
    /// # Arguments
    /// * `api_key` - Optional bearer token
    /// * `base_url` - Optional endpoint; derived from `region` when absent
    /// * `region` - Cloud region of the runtime endpoint
    /// * `model` - Model identifier
    /// * `dimensions` - Requested output length
    /// * `timeout` - Request timeout
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        region: &str,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let base_url = constructor::validate_url(base_url)
            .unwrap_or_else(|| Self::endpoint_for_region(region));

        Self {
            api_key: constructor::validate_api_key(api_key),
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Runtime endpoint of a region
    pub fn endpoint_for_region(region: &str) -> String {
        format!("https://bedrock-runtime.{}.amazonaws.com", region.trim())
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn invoke_url(&self) -> String {
        format!("{}/model/{}/invoke", self.base_url, self.model)
    }

    fn build_payload(&self, input: &EmbeddingInput) -> Value {
        let mut payload = json!({
            "embeddingConfig": { "outputEmbeddingLength": self.dimensions }
        });
        if let Some(text) = &input.text {
            payload["inputText"] = json!(text);
        }
        if let Some(image) = &input.image {
            payload["inputImage"] = json!(STANDARD.encode(image));
        }
        payload
    }

    async fn invoke(&self, payload: &Value) -> Result<Value> {
        let mut request = self
            .http_client
            .post(self.invoke_url())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("Accept", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(PROVIDER_NAME, &e, self.timeout))?;

        HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await
    }

    #[allow(clippy::cast_possible_truncation)]
    fn parse_embedding(&self, data: &Value) -> Result<Embedding> {
        let values = data["embedding"].as_array().ok_or_else(|| {
            Error::embedding("Invalid response format: missing embedding array")
        })?;
        if values.is_empty() {
            return Err(Error::embedding("Provider returned an empty embedding"));
        }

        let vector = values
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::embedding("Embedding contains a non-numeric value"))
            })
            .collect::<Result<Vec<f32>>>()?;

        if vector.len() != self.dimensions {
            return Err(Error::dimension_mismatch(self.dimensions, vector.len()));
        }
        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for TitanEmbeddingProvider {
    async fn embed(&self, input: &EmbeddingInput) -> Result<Embedding> {
        input.validate()?;
        let payload = self.build_payload(input);
        let data = self.invoke(&payload).await?;
        self.parse_embedding(&data)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "titan"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn titan_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| TITAN_DEFAULT_MODEL.to_string());
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_TITAN);
    if !TITAN_SUPPORTED_DIMENSIONS.contains(&dimensions) {
        return Err(format!(
            "Titan supports output lengths {TITAN_SUPPORTED_DIMENSIONS:?}, got {dimensions}"
        ));
    }
    let region = config.region.as_deref().unwrap_or(TITAN_DEFAULT_REGION);
    let timeout = config.timeout.unwrap_or(DEFAULT_EMBEDDING_TIMEOUT);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(TitanEmbeddingProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
        region,
        model,
        dimensions,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static TITAN_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "titan",
    description: "Titan multimodal embeddings (amazon.titan-embed-image-v1) over HTTP",
    factory: titan_factory,
};
