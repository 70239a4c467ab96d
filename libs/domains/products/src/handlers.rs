//! HTTP handlers for the Products API

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{AppResult, ErrorResponse, ValidatedJson};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProduct, CreatedResponse, ListQuery, Product};
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(schemas(Product, CreateProduct, CreatedResponse, ErrorResponse)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<S: DocumentStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products with an optional category filter
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_products<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = service.list(query.category).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = CreatedResponse),
        (status = 422, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_product<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> AppResult<Json<CreatedResponse>> {
    let created = service.create(input).await?;
    Ok(Json(created))
}

/// Fetch a single product by identifier
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "No such product", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_product<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = service.get(&id).await?;
    Ok(Json(product))
}
