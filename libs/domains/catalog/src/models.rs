use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - owned and persisted by the upstream catalog service.
///
/// The upstream assigns `product_id` and both timestamps; this application
/// never invents or rewrites them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the upstream service
    pub product_id: String,
    /// Product title
    pub product_title: String,
    /// Price, non-negative
    pub product_price: f64,
    /// Product description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    /// Creation timestamp, set by upstream
    pub created_timestamp: DateTime<Utc>,
    /// Last update timestamp, set by upstream
    pub updated_timestamp: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// Subset of [`Product`] without identifier or timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductForm {
    #[validate(length(min = 1, max = 200))]
    pub product_title: String,
    #[validate(range(min = 0.0))]
    pub product_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
}

/// DTO for updating an existing product.
///
/// The form fields stay flattened at the top level so the wire shape is
/// the create payload plus `product_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductUpdate {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub form: ProductForm,
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ProductListParams {
    /// Page number, 1-based
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Search in product title and description
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl ProductListParams {
    /// Page clamped to the `page >= 1` invariant.
    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    /// Number of items to skip for the requested page.
    pub fn offset(&self) -> u32 {
        (self.page() - 1) * self.limit
    }

    /// Search term, with an empty string treated as no search.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

/// Query sent to the upstream list endpoint.
///
/// Mirrors the upstream contract: `page`, `limit` and a precomputed
/// `offset`, with `search` present only when a term was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamListQuery {
    pub page: u32,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Paged response envelope returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<Product>,
    /// Total number of matching products reported by upstream
    pub total: u64,
    /// The requested page (after clamping)
    pub page: u32,
    /// The requested page size
    pub limit: u32,
}

/// Single-item response envelope, passed through from upstream.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductEnvelope {
    pub data: Product,
}

/// Body shapes the upstream list endpoint is known to produce.
///
/// Older deployments answer with a bare JSON array; newer ones wrap the
/// items in an envelope carrying `total` (or `count`). Both are accepted
/// and normalized into a [`ProductPage`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UpstreamProducts {
    Envelope {
        data: Vec<Product>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<Product>),
}

impl UpstreamProducts {
    /// Normalize into the uniform page envelope for the given request.
    ///
    /// A missing total falls back to `count`, then to 0.
    pub fn into_page(self, page: u32, limit: u32) -> ProductPage {
        let (data, total) = match self {
            UpstreamProducts::Envelope { data, total, count } => {
                let total = total.or(count).unwrap_or(0);
                (data, total)
            }
            UpstreamProducts::Bare(data) => (data, 0),
        };

        ProductPage {
            data,
            total,
            page,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            product_id: id.to_string(),
            product_title: format!("Product {}", id),
            product_price: 19.99,
            product_description: None,
            product_image: None,
            product_category: Some("general".to_string()),
            created_timestamp: Utc::now(),
            updated_timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_offset_is_zero_based_pages() {
        let params = ProductListParams {
            page: 3,
            limit: 10,
            search: None,
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let params = ProductListParams {
            page: 0,
            limit: 10,
            search: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_empty_search_is_no_search() {
        let params = ProductListParams {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.search_term(), None);

        let params = ProductListParams {
            search: Some("lamp".to_string()),
            ..Default::default()
        };
        assert_eq!(params.search_term(), Some("lamp"));
    }

    #[test]
    fn test_list_params_defaults() {
        let params: ProductListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.search, None);
    }

    #[test]
    fn test_upstream_envelope_into_page() {
        let body = UpstreamProducts::Envelope {
            data: vec![product("a"), product("b")],
            total: Some(57),
            count: None,
        };
        let page = body.into_page(2, 10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 57);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_upstream_count_fallback() {
        let body = UpstreamProducts::Envelope {
            data: vec![product("a")],
            total: None,
            count: Some(12),
        };
        assert_eq!(body.into_page(1, 10).total, 12);
    }

    #[test]
    fn test_upstream_bare_array_into_page() {
        let body: UpstreamProducts = serde_json::from_value(serde_json::json!([
            {
                "product_id": "p-1",
                "product_title": "Desk",
                "product_price": 120.0,
                "created_timestamp": "2024-01-01T00:00:00Z",
                "updated_timestamp": "2024-01-01T00:00:00Z"
            }
        ]))
        .unwrap();

        let page = body.into_page(1, 10);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_upstream_envelope_deserializes() {
        let body: UpstreamProducts = serde_json::from_value(serde_json::json!({
            "data": [],
            "total": 3
        }))
        .unwrap();
        assert_eq!(body.into_page(1, 10).total, 3);
    }

    #[test]
    fn test_upstream_list_query_omits_absent_search() {
        let query = UpstreamListQuery {
            page: 1,
            limit: 10,
            offset: 0,
            search: None,
        };
        let json = serde_json::to_string(&query).unwrap();
        assert!(!json.contains("search"));
    }

    #[test]
    fn test_product_update_flattens_form_fields() {
        let update: ProductUpdate = serde_json::from_value(serde_json::json!({
            "product_id": "p-9",
            "product_title": "Chair",
            "product_price": 45.5,
            "product_category": "furniture"
        }))
        .unwrap();

        assert_eq!(update.product_id, "p-9");
        assert_eq!(update.form.product_title, "Chair");

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["product_id"], "p-9");
        assert_eq!(json["product_title"], "Chair");
    }

    #[test]
    fn test_product_form_validation() {
        use validator::Validate;

        let valid = ProductForm {
            product_title: "Lamp".to_string(),
            product_price: 10.0,
            product_description: None,
            product_image: None,
            product_category: None,
        };
        assert!(valid.validate().is_ok());

        let empty_title = ProductForm {
            product_title: String::new(),
            ..valid.clone()
        };
        assert!(empty_title.validate().is_err());

        let negative_price = ProductForm {
            product_price: -1.0,
            ..valid
        };
        assert!(negative_price.validate().is_err());
    }
}
