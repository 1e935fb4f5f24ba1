//! JSON API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/health` | GET | Liveness and store size |
//! | `/api/stats` | GET | Store statistics |
//! | `/api/products?category=` | GET | Browse products |
//! | `/api/products/<id>` | GET | One product |
//! | `/api/products/<id>/image` | GET | Downloaded product image |
//! | `/api/products/<id>/similar?top_k=` | GET | Products like this one |
//! | `/api/search/text` | POST | Free-text search |
//! | `/api/search/image` | POST | Search by image |
//! | `/api/search/multimodal` | POST | Search by text and image together |

pub mod handlers;
pub mod models;

use rocket::{Catcher, Route, catchers, routes};

/// API routes for mounting at `/`
pub fn api_routes() -> Vec<Route> {
    routes![
        handlers::health,
        handlers::stats,
        handlers::list_products,
        handlers::get_product,
        handlers::product_image,
        handlers::similar_products,
        handlers::search_text,
        handlers::search_image,
        handlers::search_multimodal,
    ]
}

/// JSON catchers for unmatched and failed requests
pub fn api_catchers() -> Vec<Catcher> {
    catchers![handlers::not_found, handlers::internal_error]
}
