//! Tests for the query use case

use std::sync::Arc;

use vitrine_application::QueryService;
use vitrine_domain::ports::providers::EmbeddingProvider;
use vitrine_domain::{Error, ProductRecord, VectorStore};
use vitrine_providers::vector_store::BruteForceIndex;

use crate::support::{FailingEmbeddingProvider, MockEmbeddingProvider, product};

fn catalog_store() -> VectorStore<ProductRecord> {
    let mut store = VectorStore::new(Box::new(BruteForceIndex::new()));
    store
        .add(&[1.0, 0.0], product("A", "chair-A", "Chairs"))
        .expect("add");
    store
        .add(&[0.0, 1.0], product("B", "table-B", "Tables"))
        .expect("add");
    store
        .add(&[0.9, 0.1], product("C", "chair-C", "Chairs"))
        .expect("add");
    let mut degraded = product("D", "stool-D", "Seating");
    degraded.embedding_failed = true;
    store.add(&[0.0, 0.0], degraded).expect("add");
    store
}

fn service_with(provider: Arc<dyn EmbeddingProvider>) -> QueryService {
    QueryService::new(Arc::new(catalog_store()), provider)
}

fn service() -> QueryService {
    service_with(Arc::new(
        MockEmbeddingProvider::new(2).with_vector("armchair", vec![1.0, 0.0]),
    ))
}

fn names(hits: &[vitrine_domain::SearchHit<ProductRecord>]) -> Vec<&str> {
    hits.iter().map(|h| h.metadata.name.as_str()).collect()
}

#[tokio::test]
async fn test_text_search_ranks_by_similarity() {
    let hits = service()
        .search_by_text("armchair", 2, -1.0)
        .await
        .expect("search");

    assert_eq!(names(&hits), vec!["chair-A", "chair-C"]);
    assert!((hits[0].score - 1.0).abs() < 1e-6);
    assert!((hits[1].score - 0.9939).abs() < 1e-3);
}

#[tokio::test]
async fn test_threshold_applies_after_top_k() {
    let hits = service()
        .search_by_text("armchair", 4, 0.5)
        .await
        .expect("search");

    assert_eq!(names(&hits), vec!["chair-A", "chair-C"]);
}

#[tokio::test]
async fn test_blank_query_is_invalid() {
    let err = service().search_by_text("   ", 5, 0.0).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = service()
        .search_multimodal(None, Some(Vec::new()), 5, 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_embedding_failure() {
    let service = service_with(Arc::new(FailingEmbeddingProvider));

    let err = service
        .search_by_image(vec![1, 2, 3], 5, 0.0)
        .await
        .unwrap_err();

    assert!(err.is_embedding_failure());
}

#[test]
fn test_similar_excludes_reference_product() {
    let hits = service().search_similar("A", 2, true).expect("similar");
    assert_eq!(names(&hits), vec!["chair-C", "table-B"]);

    let with_self = service().search_similar("A", 2, false).expect("similar");
    assert_eq!(names(&with_self), vec!["chair-A", "chair-C"]);
}

#[test]
fn test_similar_unknown_product_is_not_found() {
    let err = service().search_similar("missing", 3, true).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_product_lookup_and_category_filter() {
    let service = service();

    assert_eq!(service.get_product("B").expect("product").name, "table-B");
    assert!(matches!(
        service.get_product("Z"),
        Err(Error::NotFound { .. })
    ));
    assert_eq!(service.all_products(None).len(), 4);
    let chairs: Vec<_> = service
        .all_products(Some("Chairs"))
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(chairs, vec!["A", "C"]);
}

#[test]
fn test_stats() {
    let stats = service().stats();

    assert_eq!(stats.total_products, 4);
    assert_eq!(stats.total_embeddings, 4);
    assert_eq!(stats.embedding_dimension, 2);
    assert_eq!(stats.degraded_records, 1);
    assert_eq!(stats.categories, vec!["Chairs", "Seating", "Tables"]);
}
