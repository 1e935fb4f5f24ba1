//! Provider Constants

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Titan multimodal embedding model
pub const TITAN_DEFAULT_MODEL: &str = "amazon.titan-embed-image-v1";

/// Titan multimodal output length
pub const EMBEDDING_DIMENSION_TITAN: usize = 1024;

/// Output lengths the Titan multimodal model accepts
pub const TITAN_SUPPORTED_DIMENSIONS: &[usize] = &[256, 384, 1024];

/// Region used to derive the Titan endpoint when none is configured
pub const TITAN_DEFAULT_REGION: &str = "us-east-1";

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 1024;

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default timeout for embedding API requests in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// CATALOG SCRAPER CONSTANTS
// ============================================================================

/// Selector for the product description block
pub const DESCRIPTION_SELECTOR: &str = ".products-detail";

/// Substring identifying product images
pub const PRODUCT_IMAGE_MARKER: &str = "products";

/// Image sources ending with this are site chrome, not product photos
pub const SITE_IMAGE_SUFFIX: &str = "site_info";

/// Category used when the detail page has none
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Extension used when the image URL has none
pub const DEFAULT_IMAGE_EXTENSION: &str = ".jpg";

// ============================================================================
// PERSISTENCE CONSTANTS
// ============================================================================

/// Magic prefix of a NumPy array file
pub const NPY_MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Header alignment of a NumPy array file
pub const NPY_HEADER_ALIGN: usize = 64;

/// Little-endian 32-bit float dtype descriptor
pub const NPY_DESCR_F32: &str = "<f4";
