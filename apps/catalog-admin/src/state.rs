//! Application state management

use domain_catalog::HttpProductGateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub gateway: HttpProductGateway,
}
