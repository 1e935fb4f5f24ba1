//! Common helpers for embedding providers

use std::time::Duration;

use crate::constants::DEFAULT_EMBEDDING_TIMEOUT_SECS;

/// Constructor patterns shared by embedding providers
pub mod constructor {
    /// Trim an API key, treating a blank key as absent
    pub fn validate_api_key(api_key: Option<String>) -> Option<String> {
        api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Trim a URL and drop any trailing slash
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(DEFAULT_EMBEDDING_TIMEOUT_SECS);
