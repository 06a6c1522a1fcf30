//! Embedded admin pages
//!
//! The pages are plain HTML/JS compiled into the binary; all dynamic
//! behavior goes through the proxy API under /api.

use axum::{response::Html, routing::get, Router};

const INDEX_PAGE: &str = include_str!("../assets/index.html");
const PRODUCTS_PAGE: &str = include_str!("../assets/products.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn products() -> Html<&'static str> {
    Html(PRODUCTS_PAGE)
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/products", get(products))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_embedded() {
        assert!(INDEX_PAGE.contains("Product Management System"));
        assert!(PRODUCTS_PAGE.contains("/api/products"));
        assert!(PRODUCTS_PAGE.contains("/api/product"));
    }

    #[test]
    fn test_products_page_debounces_search() {
        // The search box must debounce before hitting the proxy
        assert!(PRODUCTS_PAGE.contains("DEBOUNCE_MS"));
    }
}
