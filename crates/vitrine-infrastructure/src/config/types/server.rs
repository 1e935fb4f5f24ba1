//! HTTP front-end configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP front-end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}
