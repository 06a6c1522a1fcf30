//! Catalog Admin - product admin pages and proxy API server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::HttpProductGateway;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;
mod web;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Proxying product requests to upstream at {}",
        config.upstream.base_url
    );

    let gateway = HttpProductGateway::new(config.upstream.clone())
        .map_err(|e| eyre::eyre!("Failed to build upstream client: {}", e))?;

    let state = AppState {
        config: config.clone(),
        gateway,
    };

    // Build the app: proxy API under /api, health/ready and pages at the root
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(state.clone()))
        .merge(web::router());

    info!("Starting Catalog Admin on port {}", config.server.port);

    // Run server with graceful shutdown
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: releasing upstream client");
        drop(state);
        info!("Upstream client released");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog Admin shutdown complete");
    Ok(())
}
