//! HTTP Response Utilities
//!
//! Status handling shared by the HTTP-backed providers.

use reqwest::Response;
use vitrine_domain::error::{Error, Result};

fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check the response status and parse the JSON body
    ///
    /// Non-success statuses become `Error::Embedding` with the status class
    /// and the response body in the message.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => embedding_error(provider_name, "authentication failed", &error_text),
                413 => embedding_error(provider_name, "input too large", &error_text),
                429 => embedding_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => embedding_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => embedding_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a transport error, calling out timeouts
    pub fn request_error(
        provider_name: &str,
        error: &reqwest::Error,
        timeout: std::time::Duration,
    ) -> Error {
        if error.is_timeout() {
            Error::embedding(format!(
                "{provider_name} {} {timeout:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT
            ))
        } else {
            Error::embedding(format!("{provider_name} HTTP request failed: {error}"))
        }
    }
}
