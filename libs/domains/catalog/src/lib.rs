//! Catalog Domain
//!
//! This module provides the catalog admin domain: a thin proxy between the
//! admin API surface and the upstream product service that owns all data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/products, /product)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pagination/search contract, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Gateway   │  ← Upstream access (trait + HTTP implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::upstream::UpstreamConfig;
//! use domain_catalog::{handlers, CatalogService, HttpProductGateway};
//!
//! # fn example() -> Result<(), domain_catalog::CatalogError> {
//! let gateway = HttpProductGateway::new(UpstreamConfig::default())?;
//! let service = CatalogService::new(gateway);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod service;
pub mod upstream;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use gateway::ProductGateway;
pub use handlers::ApiDoc;
pub use models::{
    Product, ProductEnvelope, ProductForm, ProductListParams, ProductPage, ProductUpdate,
    UpstreamListQuery, UpstreamProducts,
};
pub use service::CatalogService;
pub use upstream::HttpProductGateway;
