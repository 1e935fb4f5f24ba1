//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for Vitrine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `VITRINE_*` env |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`di`] | Provider resolution and the application context |
//! | [`constants`] | Configuration defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
