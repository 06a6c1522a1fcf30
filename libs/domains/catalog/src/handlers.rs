//! HTTP handlers for the catalog admin API

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadGatewayResponse, BadRequestResponse, BadRequestValidationResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::CatalogResult;
use crate::gateway::ProductGateway;
use crate::models::{
    Product, ProductEnvelope, ProductForm, ProductListParams, ProductPage, ProductUpdate,
};
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog admin API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, create_product, update_product),
    components(
        schemas(Product, ProductForm, ProductUpdate, ProductPage, ProductEnvelope),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadGatewayResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog proxy endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<G: ProductGateway + 'static>(service: CatalogService<G>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route(
            "/product",
            get(get_product).post(create_product).put(update_product),
        )
        .with_state(shared_service)
}

/// List products with pagination and optional search
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Page of products", body = ProductPage),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn list_products<G: ProductGateway>(
    State(service): State<Arc<CatalogService<G>>>,
    Query(params): Query<ProductListParams>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(params).await?;
    Ok(Json(page))
}

/// Query parameters for the single-item route
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductItemQuery {
    /// Product ID assigned by the upstream service
    pub product_id: Option<String>,
}

/// Get a single product by ID
#[utoipa::path(
    get,
    path = "/product",
    tag = "Products",
    params(ProductItemQuery),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn get_product<G: ProductGateway>(
    State(service): State<Arc<CatalogService<G>>>,
    Query(query): Query<ProductItemQuery>,
) -> CatalogResult<Json<ProductEnvelope>> {
    let product_id = query.product_id.unwrap_or_default();
    let envelope = service.get_product(&product_id).await?;
    Ok(Json(envelope))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/product",
    tag = "Products",
    request_body = ProductForm,
    responses(
        (status = 200, description = "Product created", body = ProductEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn create_product<G: ProductGateway>(
    State(service): State<Arc<CatalogService<G>>>,
    ValidatedJson(form): ValidatedJson<ProductForm>,
) -> CatalogResult<Json<ProductEnvelope>> {
    let envelope = service.create_product(form).await?;
    Ok(Json(envelope))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/product",
    tag = "Products",
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn update_product<G: ProductGateway>(
    State(service): State<Arc<CatalogService<G>>>,
    ValidatedJson(update): ValidatedJson<ProductUpdate>,
) -> CatalogResult<Json<ProductEnvelope>> {
    let envelope = service.update_product(update).await?;
    Ok(Json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::gateway::MockProductGateway;
    use crate::models::UpstreamProducts;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt; // For oneshot()

    fn product(id: &str) -> Product {
        Product {
            product_id: id.to_string(),
            product_title: format!("Product {}", id),
            product_price: 10.0,
            product_description: None,
            product_image: None,
            product_category: None,
            created_timestamp: Utc::now(),
            updated_timestamp: Utc::now(),
        }
    }

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_returns_envelope() {
        let mut mock = MockProductGateway::new();
        mock.expect_list()
            .withf(|q| q.page == 2 && q.limit == 5 && q.offset == 5)
            .returning(|_| {
                Ok(UpstreamProducts::Envelope {
                    data: vec![product("a")],
                    total: Some(11),
                    count: None,
                })
            });

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products?page=2&limit=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["total"], 11);
        assert_eq!(body["page"], 2);
        assert_eq!(body["limit"], 5);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_product_without_id_is_400() {
        let mut mock = MockProductGateway::new();
        mock.expect_fetch().never();

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/product")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Product ID is required");
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock = MockProductGateway::new();
        mock.expect_fetch()
            .withf(|id| id == "p-1")
            .returning(|_| Ok(ProductEnvelope { data: product("p-1") }));

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/product?product_id=p-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["data"]["product_id"], "p-1");
    }

    #[tokio::test]
    async fn test_get_product_upstream_404_maps_to_404() {
        let mut mock = MockProductGateway::new();
        mock.expect_fetch().returning(|_| {
            Err(CatalogError::UpstreamStatus {
                status: 404,
                body: String::new(),
            })
        });

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/product?product_id=missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_product_validates_body() {
        let mut mock = MockProductGateway::new();
        mock.expect_create().never();

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/product")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "product_title": "",
                            "product_price": 10.0
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_product_passes_body_through() {
        let mut mock = MockProductGateway::new();
        mock.expect_create()
            .withf(|f| f.product_title == "Desk" && f.product_category.as_deref() == Some("office"))
            .returning(|_| Ok(ProductEnvelope { data: product("new-1") }));

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/product")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "product_title": "Desk",
                            "product_price": 120.0,
                            "product_category": "office"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["data"]["product_id"], "new-1");
    }

    #[tokio::test]
    async fn test_update_product_requires_id() {
        let mut mock = MockProductGateway::new();
        mock.expect_update().never();

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/product")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "product_title": "Desk",
                            "product_price": 120.0
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Missing product_id fails deserialization of the update payload
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_product_round_trips() {
        let mut mock = MockProductGateway::new();
        mock.expect_update()
            .withf(|u| u.product_id == "p-3" && u.form.product_price == 99.0)
            .returning(|_| Ok(ProductEnvelope { data: product("p-3") }));

        let app = router(CatalogService::new(mock));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/product")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "product_id": "p-3",
                            "product_title": "Desk",
                            "product_price": 99.0
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["data"]["product_id"], "p-3");
    }
}
