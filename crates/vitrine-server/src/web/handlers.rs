//! Web Handlers Module

use rocket::get;
use rocket::http::ContentType;
use rocket::response::content::RawHtml;

// Embed templates at compile time
const INDEX_HTML: &str = include_str!("templates/index.html");

/// Search page
#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

/// Favicon handler - returns a simple SVG icon
#[get("/favicon.ico")]
pub fn favicon() -> (ContentType, &'static str) {
    (
        ContentType::SVG,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">🪑</text></svg>"#,
    )
}
