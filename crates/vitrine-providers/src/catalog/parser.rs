//! Storefront page parsing
//!
//! Pure functions over fetched HTML. Kept apart from the HTTP client so
//! they can be exercised on fixtures.

use std::collections::HashSet;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use vitrine_domain::error::{Error, Result};
use vitrine_domain::value_objects::ProductRecord;

use crate::constants::{
    DEFAULT_IMAGE_EXTENSION, DESCRIPTION_SELECTOR, PRODUCT_IMAGE_MARKER, SITE_IMAGE_SUFFIX,
    UNKNOWN_CATEGORY,
};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::scrape(format!("Invalid selector '{css}': {e:?}")))
}

/// Visible text of an element, whitespace-normalized
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parser for catalog list pages and product detail pages
#[derive(Debug)]
pub struct CatalogPageParser {
    links: Selector,
    name: Selector,
    category: Selector,
    description: Selector,
    image: Selector,
}

impl CatalogPageParser {
    /// Build a parser recognizing detail links by `detail_marker`
    ///
    /// # Errors
    /// `Scrape` when the marker cannot be embedded in a CSS selector.
    pub fn new(detail_marker: &str) -> Result<Self> {
        if detail_marker.is_empty() || detail_marker.contains('"') {
            return Err(Error::scrape(format!(
                "Invalid detail link marker '{detail_marker}'"
            )));
        }
        Ok(Self {
            links: selector(&format!("a[href*=\"{detail_marker}\"]"))?,
            name: selector("h1")?,
            category: selector("h2")?,
            description: selector(DESCRIPTION_SELECTOR)?,
            image: selector("img[src]")?,
        })
    }

    /// Absolute detail page URLs on a list page, first occurrence order
    pub fn product_links(&self, html: &str, base_url: &Url) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();

        document
            .select(&self.links)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| base_url.join(href.trim()).ok())
            .map(String::from)
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    /// Product described by a detail page
    ///
    /// Returns `None` when no identifier can be derived from `detail_url`.
    pub fn product(&self, html: &str, detail_url: &str) -> Option<ProductRecord> {
        let product_id = product_id_from_url(detail_url)?;
        let document = Html::parse_document(html);

        let first_text = |selector: &Selector| {
            document
                .select(selector)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty())
        };

        let name = first_text(&self.name).unwrap_or_else(|| format!("Product {product_id}"));
        let category = first_text(&self.category).unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        let description = first_text(&self.description).unwrap_or_default();

        let image_url = document
            .select(&self.image)
            .filter_map(|img| img.value().attr("src"))
            .map(str::trim)
            .find(|src| src.contains(PRODUCT_IMAGE_MARKER) && !src.ends_with(SITE_IMAGE_SUFFIX))
            .and_then(|src| resolve(detail_url, src));

        let mut record = ProductRecord::new(product_id, name, category);
        record.description = description;
        record.image_url = image_url;
        record.detail_url = detail_url.to_string();
        Some(record)
    }
}

fn resolve(base: &str, reference: &str) -> Option<String> {
    match Url::parse(base) {
        Ok(base) => base.join(reference).ok().map(String::from),
        Err(_) => Some(reference.to_string()),
    }
}

/// Last non-empty path segment of a detail page URL
pub fn product_id_from_url(detail_url: &str) -> Option<String> {
    let path = match Url::parse(detail_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => detail_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// File extension of an image URL, including the dot
///
/// The query string is ignored; URLs without an extension get `.jpg`.
pub fn image_extension(image_url: &str) -> String {
    let path = Url::parse(image_url)
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| image_url.split('?').next().unwrap_or_default().to_string());

    Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map_or_else(
            || DEFAULT_IMAGE_EXTENSION.to_string(),
            |ext| format!(".{ext}"),
        )
}
