use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{
    ProductEnvelope, ProductForm, ProductUpdate, UpstreamListQuery, UpstreamProducts,
};

/// Gateway trait for the upstream product API.
///
/// This trait defines the outbound interface for product data. The
/// production implementation forwards over HTTP; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// List products for a page/limit/offset query
    async fn list(&self, query: &UpstreamListQuery) -> CatalogResult<UpstreamProducts>;

    /// Fetch a single product by its upstream identifier
    async fn fetch(&self, product_id: &str) -> CatalogResult<ProductEnvelope>;

    /// Create a new product
    async fn create(&self, form: &ProductForm) -> CatalogResult<ProductEnvelope>;

    /// Update an existing product
    async fn update(&self, update: &ProductUpdate) -> CatalogResult<ProductEnvelope>;
}
