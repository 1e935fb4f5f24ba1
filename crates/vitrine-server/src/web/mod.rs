//! Web UI
//!
//! A single HTML page, embedded at compile time, that drives the JSON API.

pub mod handlers;

use rocket::{Route, routes};

/// Web routes for mounting at `/`
pub fn web_routes() -> Vec<Route> {
    routes![handlers::index, handlers::favicon]
}
