//! HTTP implementation of the product gateway.

use async_trait::async_trait;
use core_config::upstream::UpstreamConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};
use crate::gateway::ProductGateway;
use crate::models::{
    ProductEnvelope, ProductForm, ProductUpdate, UpstreamListQuery, UpstreamProducts,
};

/// Upstream list endpoint path
const PRODUCTS_PATH: &str = "/api/web/v1/products";
/// Upstream single-item endpoint path
const PRODUCT_PATH: &str = "/api/web/v1/product";

/// Product gateway backed by the upstream HTTP API.
///
/// Holds a pooled [`reqwest::Client`] with the configured request timeout;
/// cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct HttpProductGateway {
    config: UpstreamConfig,
    client: Client,
}

impl HttpProductGateway {
    pub fn new(config: UpstreamConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Upstream)?;

        Ok(Self { config, client })
    }

    /// Cheap reachability check for readiness probes.
    ///
    /// Any HTTP response counts as reachable; only transport failures
    /// (refused connection, DNS, timeout) are errors.
    pub async fn probe(&self) -> CatalogResult<()> {
        let url = self.config.endpoint("/");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::Upstream)?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CatalogResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(CatalogError::Decode)
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list(&self, query: &UpstreamListQuery) -> CatalogResult<UpstreamProducts> {
        let url = self.config.endpoint(PRODUCTS_PATH);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Upstream)?;

        Self::decode(response).await
    }

    async fn fetch(&self, product_id: &str) -> CatalogResult<ProductEnvelope> {
        let url = self.config.endpoint(PRODUCT_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("product_id", product_id)])
            .send()
            .await
            .map_err(CatalogError::Upstream)?;

        Self::decode(response).await
    }

    async fn create(&self, form: &ProductForm) -> CatalogResult<ProductEnvelope> {
        let url = self.config.endpoint(PRODUCT_PATH);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(CatalogError::Upstream)?;

        Self::decode(response).await
    }

    async fn update(&self, update: &ProductUpdate) -> CatalogResult<ProductEnvelope> {
        let url = self.config.endpoint(PRODUCT_PATH);
        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(CatalogError::Upstream)?;

        Self::decode(response).await
    }
}
