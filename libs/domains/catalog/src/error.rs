use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product ID is required")]
    MissingProductId,

    #[error("Product not found: {0}")]
    NotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Upstream(e) => {
                tracing::error!("Upstream transport failure: {:?}", e);
                AppError::BadGateway("Failed to reach the product catalog service".to_string())
            }
            CatalogError::UpstreamStatus { status: 404, .. } => {
                AppError::NotFound("Product not found".to_string())
            }
            CatalogError::UpstreamStatus { status, body } => {
                tracing::error!(status, body = %body, "Upstream rejected request");
                AppError::BadGateway(format!(
                    "Product catalog service returned status {}",
                    status
                ))
            }
            CatalogError::Decode(e) => {
                tracing::error!("Upstream response decode failure: {:?}", e);
                AppError::BadGateway(
                    "Invalid response from the product catalog service".to_string(),
                )
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::MissingProductId => {
                AppError::BadRequest("Product ID is required".to_string())
            }
            CatalogError::NotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_id_maps_to_400() {
        let response = CatalogError::MissingProductId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_404_maps_to_404() {
        let response = CatalogError::UpstreamStatus {
            status: 404,
            body: String::new(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_500_maps_to_502() {
        let response = CatalogError::UpstreamStatus {
            status: 500,
            body: "boom".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = CatalogError::Validation("bad title".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
