//! Catalog proxy routes

use axum::Router;
use domain_catalog::{handlers, CatalogService};

use crate::state::AppState;

/// Create the catalog proxy router
pub fn router(state: &AppState) -> Router {
    let service = CatalogService::new(state.gateway.clone());
    handlers::router(service)
}
