//! # Vitrine HTTP Front-End
//!
//! Rocket application serving a single-page search UI and the JSON API it
//! calls.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | JSON endpoints: search, browse, similar products, stats |
//! | [`web`] | The HTML search page |
//! | [`server`] | Rocket assembly and launch |

pub mod api;
pub mod server;
pub mod web;

pub use api::handlers::{SearchDefaults, SearchState};
pub use server::{run_server, search_rocket};
