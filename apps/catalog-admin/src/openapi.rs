//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Catalog Admin
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Admin",
        version = "0.1.0",
        description = "Product catalog admin proxy over the upstream product API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog proxy endpoints")
    )
)]
pub struct ApiDoc;
