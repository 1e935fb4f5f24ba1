//! Embedding Value Objects
//!
//! Value objects for multimodal embeddings and the inputs they are
//! generated from.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Multimodal Embedding
///
/// A fixed-length vector placing an item (image, text or both) in the
/// shared similarity space of the model that produced it.
///
/// ## Example
///
/// ```rust
/// use vitrine_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "amazon.titan-embed-image-v1");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Identifier of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving `dimensions` from the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Placeholder vector used for degraded records
    pub fn zeros(dimensions: usize, model: impl Into<String>) -> Self {
        Self::new(vec![0.0; dimensions], model)
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|v| *v == 0.0)
    }
}

/// Input to an embedding call: text, image bytes, or both
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingInput {
    /// Free-form text
    pub text: Option<String>,
    /// Raw image bytes (JPEG/PNG)
    pub image: Option<Vec<u8>>,
}

impl EmbeddingInput {
    /// Text-only input
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    /// Image-only input
    pub fn image(bytes: Vec<u8>) -> Self {
        Self {
            text: None,
            image: Some(bytes),
        }
    }

    /// Joint text and image input; empty parts are dropped
    pub fn multimodal(text: Option<String>, image: Option<Vec<u8>>) -> Self {
        Self {
            text: text.filter(|t| !t.trim().is_empty()),
            image: image.filter(|i| !i.is_empty()),
        }
    }

    /// Reject inputs carrying neither text nor image
    pub fn validate(&self) -> Result<()> {
        let has_text = self.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_image = self.image.as_ref().is_some_and(|i| !i.is_empty());
        if has_text || has_image {
            Ok(())
        } else {
            Err(Error::invalid_argument(
                "Either text or image must be provided",
            ))
        }
    }
}
