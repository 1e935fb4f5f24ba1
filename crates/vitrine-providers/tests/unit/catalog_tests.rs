//! Tests for the catalog scraper

use std::time::Duration;

use url::Url;
use vitrine_domain::ports::providers::CatalogSource;
use vitrine_domain::ProductRecord;
use vitrine_providers::catalog::{CatalogPageParser, CatalogScraperConfig, HttpCatalogScraper};

const LIST_PAGE: &str = r#"
<html><body>
  <nav><a href="/about">About</a></nav>
  <div class="grid">
    <a href="/products_detail/1075"><img src="/upload/products/1075_s.jpg"></a>
    <a href="/products_detail/1075">Lift Desk</a>
    <a href="https://www.u-chance.com.tw/products_detail/1080">Mesh Chair</a>
    <a href="products_detail/1092">Cabinet</a>
  </div>
</body></html>
"#;

const DETAIL_PAGE: &str = r#"
<html><body>
  <img src="/upload/site_info">
  <img src="/upload/banner.jpg">
  <h1>  升降桌  </h1>
  <h2>辦公桌</h2>
  <div class="products-detail">
    <p>Electric lift,</p>
    <p>two motors</p>
  </div>
  <img src="/upload/products/1075.png?v=2">
</body></html>
"#;

fn parser() -> CatalogPageParser {
    CatalogPageParser::new("products_detail").expect("parser")
}

fn base() -> Url {
    Url::parse("https://www.u-chance.com.tw").expect("url")
}

#[test]
fn test_list_page_links_are_absolute_and_unique() {
    let links = parser().product_links(LIST_PAGE, &base());

    assert_eq!(
        links,
        vec![
            "https://www.u-chance.com.tw/products_detail/1075",
            "https://www.u-chance.com.tw/products_detail/1080",
            "https://www.u-chance.com.tw/products_detail/1092",
        ]
    );
}

#[test]
fn test_detail_page_fields() {
    let product = parser()
        .product(DETAIL_PAGE, "https://www.u-chance.com.tw/products_detail/1075")
        .expect("product");

    assert_eq!(product.product_id, "1075");
    assert_eq!(product.name, "升降桌");
    assert_eq!(product.category, "辦公桌");
    assert_eq!(product.description, "Electric lift, two motors");
    assert_eq!(
        product.image_url.as_deref(),
        Some("https://www.u-chance.com.tw/upload/products/1075.png?v=2")
    );
    assert_eq!(
        product.detail_url,
        "https://www.u-chance.com.tw/products_detail/1075"
    );
}

#[test]
fn test_detail_page_fallbacks() {
    let product = parser()
        .product(
            "<html><body><img src=\"/logo.png\"></body></html>",
            "https://shop.example/products_detail/77",
        )
        .expect("product");

    assert_eq!(product.name, "Product 77");
    assert_eq!(product.category, "Unknown");
    assert_eq!(product.description, "");
    assert!(product.image_url.is_none());
}

#[test]
fn test_detail_page_without_identifier_is_skipped() {
    assert!(parser().product(DETAIL_PAGE, "https://shop.example/").is_none());
}

fn scraper(base_url: String) -> HttpCatalogScraper {
    HttpCatalogScraper::new(CatalogScraperConfig {
        base_url,
        list_path: "/products/all/".to_string(),
        detail_marker: "products_detail".to_string(),
        request_delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
        user_agent: "vitrine-test".to_string(),
    })
    .expect("scraper")
}

#[tokio::test]
async fn test_scraper_lists_and_fetches_over_http() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/products/all/1")
        .match_header("user-agent", "vitrine-test")
        .with_body(r#"<a href="/products_detail/5">Stool</a>"#)
        .create_async()
        .await;
    let detail = server
        .mock("GET", "/products_detail/5")
        .with_body("<h1>Stool</h1><h2>Seating</h2>")
        .create_async()
        .await;

    let scraper = scraper(server.url());
    let links = scraper.list_page(1).await.expect("list");
    assert_eq!(links, vec![format!("{}/products_detail/5", server.url())]);

    let product = scraper
        .fetch_product(&links[0])
        .await
        .expect("fetch")
        .expect("product");

    list.assert_async().await;
    detail.assert_async().await;
    assert_eq!(product.product_id, "5");
    assert_eq!(product.name, "Stool");
    assert_eq!(product.category, "Seating");
}

#[tokio::test]
async fn test_scraper_failures_yield_empty_results() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/products/all/2")
        .with_status(500)
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/products_detail/9")
        .with_status(404)
        .create_async()
        .await;

    let scraper = scraper(server.url());

    assert!(scraper.list_page(2).await.expect("list").is_empty());
    let product = scraper
        .fetch_product(&format!("{}/products_detail/9", server.url()))
        .await
        .expect("fetch");
    assert!(product.is_none());
}

#[tokio::test]
async fn test_image_saved_under_product_id() {
    let mut server = mockito::Server::new_async().await;
    let _image = server
        .mock("GET", "/upload/products/5.png")
        .match_query(mockito::Matcher::Any)
        .with_body([0x89, b'P', b'N', b'G'])
        .create_async()
        .await;
    let dir = tempfile::tempdir().expect("tempdir");

    let mut product = ProductRecord::new("5", "Stool", "Seating");
    product.image_url = Some(format!("{}/upload/products/5.png?v=7", server.url()));

    let path = scraper(server.url())
        .download_image(&product, dir.path())
        .await
        .expect("download")
        .expect("saved");

    assert_eq!(path, dir.path().join("5.png"));
    assert_eq!(std::fs::read(&path).expect("read"), vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_product_without_image_url_downloads_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let product = ProductRecord::new("6", "Bench", "Seating");

    let path = scraper("http://127.0.0.1:9".to_string())
        .download_image(&product, dir.path())
        .await
        .expect("download");

    assert!(path.is_none());
}
