//! Provider Utilities

mod http_response;

pub use http_response::HttpResponseUtils;
