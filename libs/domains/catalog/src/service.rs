//! Catalog Service - proxy logic between the admin API and the upstream

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::gateway::ProductGateway;
use crate::models::{
    ProductEnvelope, ProductForm, ProductListParams, ProductPage, ProductUpdate, UpstreamListQuery,
};

/// Catalog service translating admin API requests into upstream calls.
///
/// This layer owns the pagination/search contract: clamping the page,
/// computing the offset, and normalizing whatever the upstream answers
/// into the uniform page envelope. Bodies for create/update pass through
/// unchanged apart from validation.
pub struct CatalogService<G: ProductGateway> {
    gateway: Arc<G>,
}

impl<G: ProductGateway> CatalogService<G> {
    /// Create a new CatalogService with the given gateway
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// List products for a page/limit/search request
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ProductListParams) -> CatalogResult<ProductPage> {
        let page = params.page();
        let limit = params.limit;

        let query = UpstreamListQuery {
            page,
            limit,
            offset: params.offset(),
            search: params.search_term().map(str::to_owned),
        };

        let body = self.gateway.list(&query).await?;
        Ok(body.into_page(page, limit))
    }

    /// Fetch a single product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: &str) -> CatalogResult<ProductEnvelope> {
        if product_id.trim().is_empty() {
            return Err(CatalogError::MissingProductId);
        }

        self.gateway.fetch(product_id).await
    }

    /// Create a new product
    #[instrument(skip(self, form), fields(product_title = %form.product_title))]
    pub async fn create_product(&self, form: ProductForm) -> CatalogResult<ProductEnvelope> {
        form.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.gateway.create(&form).await
    }

    /// Update an existing product
    #[instrument(skip(self, update), fields(product_id = %update.product_id))]
    pub async fn update_product(&self, update: ProductUpdate) -> CatalogResult<ProductEnvelope> {
        update
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        if update.product_id.trim().is_empty() {
            return Err(CatalogError::MissingProductId);
        }

        self.gateway.update(&update).await
    }
}

impl<G: ProductGateway> Clone for CatalogService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}
