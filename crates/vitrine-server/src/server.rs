//! Rocket assembly and launch

use rocket::{Build, Rocket};
use tracing::info;
use vitrine_domain::error::Result;
use vitrine_infrastructure::config::ServerConfig;
use vitrine_infrastructure::error_ext::ErrorContext;

use crate::api::{api_catchers, api_routes};
use crate::api::handlers::SearchState;
use crate::web::web_routes;

/// Build the Rocket application around a loaded store
pub fn search_rocket(state: SearchState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", web_routes())
        .mount("/", api_routes())
        .register("/", api_catchers())
}

/// Serve until Rocket shuts down (Ctrl+C)
pub async fn run_server(config: &ServerConfig, state: SearchState) -> Result<()> {
    info!(
        host = %config.host,
        port = config.port,
        products = state.service.store().len(),
        "Starting search server"
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port));

    search_rocket(state)
        .configure(figment)
        .launch()
        .await
        .context("Search server failed")?;
    Ok(())
}
