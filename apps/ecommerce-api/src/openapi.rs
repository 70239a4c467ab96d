//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Ecommerce API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ecommerce API",
        version = "0.1.0",
        description = "Product catalog and order placement API over MongoDB"
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order placement and listing endpoints")
    )
)]
pub struct ApiDoc;
