//! API handlers
//!
//! Search endpoints answer with a [`SearchResponse`] in every case. Bad
//! input is a 400, an unknown product a 404, and a failing embedding
//! service a 502.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rocket::fs::NamedFile;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{Request, State, catch, get, post};
use tracing::{error, warn};
use vitrine_application::use_cases::QueryService;
use vitrine_domain::constants::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K, MAX_TOP_K};
use vitrine_domain::error::{Error, Result};
use vitrine_domain::value_objects::{ProductRecord, SearchHit, StoreStats};
use vitrine_infrastructure::config::SearchConfig;

use super::models::{
    ErrorResponse, HealthResponse, ImageSearchRequest, MultimodalSearchRequest,
    ProductListResponse, SearchResponse, TextSearchRequest,
};

/// Search parameters applied when a request leaves them out
#[derive(Debug, Clone, Copy)]
pub struct SearchDefaults {
    /// Results per query
    pub top_k: usize,
    /// Minimum similarity
    pub similarity_threshold: f32,
}

impl SearchDefaults {
    /// Requested result count, clamped to `1..=MAX_TOP_K`
    pub fn top_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.top_k).clamp(1, MAX_TOP_K)
    }

    /// Requested threshold, or the default
    pub fn threshold(&self, requested: Option<f32>) -> f32 {
        requested.unwrap_or(self.similarity_threshold)
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl From<&SearchConfig> for SearchDefaults {
    fn from(config: &SearchConfig) -> Self {
        Self {
            top_k: config.top_k,
            similarity_threshold: config.similarity_threshold,
        }
    }
}

/// State shared by every handler
#[derive(Clone)]
pub struct SearchState {
    /// Query service over the loaded store
    pub service: Arc<QueryService>,
    /// Defaults for omitted parameters
    pub defaults: SearchDefaults,
}

type SearchResult = (Status, Json<SearchResponse>);
type ApiError = (Status, Json<ErrorResponse>);

fn status_for(err: &Error) -> Status {
    match err {
        Error::InvalidArgument { .. } => Status::BadRequest,
        Error::NotFound { .. } => Status::NotFound,
        e if e.is_embedding_failure() => Status::BadGateway,
        _ => Status::InternalServerError,
    }
}

fn search_outcome(result: Result<Vec<SearchHit<ProductRecord>>>) -> SearchResult {
    match result {
        Ok(hits) => (Status::Ok, Json(SearchResponse::from_hits(hits))),
        Err(e) => {
            let status = status_for(&e);
            if status.code >= 500 {
                error!(error = %e, status = status.code, "Search failed");
            } else {
                warn!(error = %e, status = status.code, "Search rejected");
            }
            (status, Json(SearchResponse::failure(e.to_string())))
        }
    }
}

fn bad_body(err: &json::Error<'_>) -> SearchResult {
    warn!(error = %err, "Malformed search request");
    (
        Status::BadRequest,
        Json(SearchResponse::failure(format!("Invalid request body: {err}"))),
    )
}

/// Decode a base64 image, accepting a `data:<mime>;base64,` prefix
fn decode_image(encoded: &str) -> Result<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::invalid_argument(format!("Invalid image data: {e}")))
}

/// Health check
#[get("/health")]
pub fn health(state: &State<SearchState>) -> Json<HealthResponse> {
    let store = state.service.store();
    Json(HealthResponse {
        status: "healthy",
        products: store.len(),
        dimension: store.dimension().unwrap_or(0),
        index: store.index_name().to_string(),
        embedding_provider: state.service.provider().provider_name().to_string(),
    })
}

/// Store statistics
#[get("/api/stats")]
pub fn stats(state: &State<SearchState>) -> Json<StoreStats> {
    Json(state.service.stats())
}

/// Browse products, optionally within one category
#[get("/api/products?<category>")]
pub fn list_products(
    state: &State<SearchState>,
    category: Option<&str>,
) -> Json<ProductListResponse> {
    let products = state
        .service
        .all_products(category.filter(|c| !c.is_empty()));
    Json(ProductListResponse {
        total: products.len(),
        products,
    })
}

/// One product
#[get("/api/products/<id>")]
pub fn get_product(
    state: &State<SearchState>,
    id: &str,
) -> std::result::Result<Json<ProductRecord>, ApiError> {
    state
        .service
        .get_product(id)
        .map(Json)
        .map_err(|e| (status_for(&e), Json(ErrorResponse::new(e.to_string()))))
}

/// The downloaded image of a product
#[get("/api/products/<id>/image")]
pub async fn product_image(
    state: &State<SearchState>,
    id: &str,
) -> std::result::Result<NamedFile, ApiError> {
    let product = state
        .service
        .get_product(id)
        .map_err(|e| (status_for(&e), Json(ErrorResponse::new(e.to_string()))))?;
    let Some(path) = product.local_image_path else {
        return Err((
            Status::NotFound,
            Json(ErrorResponse::new(format!("Product {id} has no image"))),
        ));
    };

    NamedFile::open(&path).await.map_err(|e| {
        warn!(product_id = %id, path = %path, error = %e, "Product image unreadable");
        (
            Status::NotFound,
            Json(ErrorResponse::new(format!("Image of product {id} is unavailable"))),
        )
    })
}

/// Products most similar to a stored product, excluding itself
#[get("/api/products/<id>/similar?<top_k>")]
pub fn similar_products(
    state: &State<SearchState>,
    id: &str,
    top_k: Option<usize>,
) -> SearchResult {
    let top_k = state.defaults.top_k(top_k);
    search_outcome(state.service.search_similar(id, top_k, true))
}

/// Free-text search
#[post("/api/search/text", data = "<request>")]
pub async fn search_text(
    state: &State<SearchState>,
    request: std::result::Result<Json<TextSearchRequest>, json::Error<'_>>,
) -> SearchResult {
    let request = match request {
        Ok(Json(request)) => request,
        Err(e) => return bad_body(&e),
    };
    let top_k = state.defaults.top_k(request.top_k);
    let threshold = state.defaults.threshold(request.threshold);

    search_outcome(
        state
            .service
            .search_by_text(&request.query, top_k, threshold)
            .await,
    )
}

/// Search by image
#[post("/api/search/image", data = "<request>")]
pub async fn search_image(
    state: &State<SearchState>,
    request: std::result::Result<Json<ImageSearchRequest>, json::Error<'_>>,
) -> SearchResult {
    let request = match request {
        Ok(Json(request)) => request,
        Err(e) => return bad_body(&e),
    };
    let image = match decode_image(&request.image_base64) {
        Ok(image) => image,
        Err(e) => return search_outcome(Err(e)),
    };
    let top_k = state.defaults.top_k(request.top_k);
    let threshold = state.defaults.threshold(request.threshold);

    search_outcome(
        state
            .service
            .search_by_image(image, top_k, threshold)
            .await,
    )
}

/// Search by text and image embedded together
#[post("/api/search/multimodal", data = "<request>")]
pub async fn search_multimodal(
    state: &State<SearchState>,
    request: std::result::Result<Json<MultimodalSearchRequest>, json::Error<'_>>,
) -> SearchResult {
    let request = match request {
        Ok(Json(request)) => request,
        Err(e) => return bad_body(&e),
    };
    let image = match request.image_base64.as_deref().map(decode_image).transpose() {
        Ok(image) => image,
        Err(e) => return search_outcome(Err(e)),
    };
    let top_k = state.defaults.top_k(request.top_k);
    let threshold = state.defaults.threshold(request.threshold);

    search_outcome(
        state
            .service
            .search_multimodal(request.query, image, top_k, threshold)
            .await,
    )
}

/// JSON body for unmatched routes
#[catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!("No route for {}", request.uri())))
}

/// JSON body for unexpected failures
#[catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}
