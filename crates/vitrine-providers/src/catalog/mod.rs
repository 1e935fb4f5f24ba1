//! Catalog Source Implementations
//!
//! [`HttpCatalogScraper`] walks a paginated storefront over HTTP and parses
//! its pages with [`CatalogPageParser`].

pub mod http;
pub mod parser;

pub use http::{CatalogScraperConfig, HttpCatalogScraper};
pub use parser::CatalogPageParser;
