//! Browse, stats and health endpoint tests

use rocket::http::{ContentType, Status};
use tempfile::TempDir;

use crate::support::{client, json_body};

#[rocket::async_test]
async fn test_health_reports_store() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["products"], 4);
    assert_eq!(json["dimension"], 3);
    assert_eq!(json["index"], "brute-force");
    assert_eq!(json["embedding_provider"], "axis");
}

#[rocket::async_test]
async fn test_stats() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let json = json_body(client.get("/api/stats").dispatch().await).await;
    assert_eq!(json["total_products"], 4);
    assert_eq!(json["total_embeddings"], 4);
    assert_eq!(json["embedding_dimension"], 3);
    assert_eq!(
        json["categories"],
        serde_json::json!(["Chairs", "Desks", "Storage"])
    );
}

#[rocket::async_test]
async fn test_list_products_with_and_without_category() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let all = json_body(client.get("/api/products").dispatch().await).await;
    assert_eq!(all["total"], 4);
    assert_eq!(all["products"][0]["product_id"], "1");

    let desks = json_body(client.get("/api/products?category=Desks").dispatch().await).await;
    assert_eq!(desks["total"], 2);
    let ids: Vec<&str> = desks["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);

    let none = json_body(client.get("/api/products?category=Lamps").dispatch().await).await;
    assert_eq!(none["total"], 0);
}

#[rocket::async_test]
async fn test_get_product() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let response = client.get("/api/products/3").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;
    assert_eq!(json["name"], "Chair A");
    assert_eq!(json["category"], "Chairs");

    let missing = client.get("/api/products/999").dispatch().await;
    assert_eq!(missing.status(), Status::NotFound);
    let json = json_body(missing).await;
    assert!(json["error"].as_str().unwrap().contains("999"));
}

#[rocket::async_test]
async fn test_product_image() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let response = client.get("/api/products/3/image").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JPEG));
    assert_eq!(response.into_bytes().await.unwrap(), b"chair-image-bytes");

    let without_image = client.get("/api/products/1/image").dispatch().await;
    assert_eq!(without_image.status(), Status::NotFound);

    let unknown = client.get("/api/products/999/image").dispatch().await;
    assert_eq!(unknown.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_unknown_route_is_json_404() {
    let dir = TempDir::new().unwrap();
    let client = client(dir.path()).await;

    let response = client.get("/api/nothing-here").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("/api/nothing-here"));
}
