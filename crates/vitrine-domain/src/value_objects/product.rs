//! Catalog product records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata describing one catalog product
///
/// Field names match the persisted products file. Fields this type does not
/// know about are kept in `extra` so a load/save cycle does not lose them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductRecord {
    /// Stable identifier taken from the detail page URL
    pub product_id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Remote image location
    #[serde(default)]
    pub image_url: Option<String>,
    /// Product detail page
    #[serde(default)]
    pub detail_url: String,
    /// Downloaded image on local disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_image_path: Option<String>,
    /// Set when the embedding for this product could not be generated
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub embedding_failed: bool,
    /// Unrecognized fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRecord {
    /// Create a record with the required identifying fields
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Text fed to the embedding model alongside the product image
    ///
    /// `"{name} - {category}"`, followed by up to `max_description_chars`
    /// characters of the description when one exists.
    pub fn embedding_text(&self, max_description_chars: usize) -> String {
        let mut text = format!("{} - {}", self.name, self.category);
        if !self.description.is_empty() {
            let excerpt: String = self
                .description
                .chars()
                .take(max_description_chars)
                .collect();
            text.push_str(" - ");
            text.push_str(&excerpt);
        }
        text
    }
}
