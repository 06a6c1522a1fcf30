//! API routes module

pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes (nested under /api by the server bootstrap)
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(catalog::router(state))
}
