//! HTTP handlers for the Orders API

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{AppResult, ErrorResponse, ValidatedJson};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateOrder, Customer, ListQuery, OrderItem, OrderSummary};
use crate::service::OrderService;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, create_order),
    components(schemas(CreateOrder, Customer, OrderItem, OrderSummary, ErrorResponse)),
    tags(
        (name = "Orders", description = "Order placement and listing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints
pub fn router<S: DocumentStore + 'static>(service: OrderService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_orders).post(create_order))
        .with_state(shared_service)
}

/// List orders, most recent first
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(ListQuery),
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderSummary>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_orders<S: DocumentStore>(
    State(service): State<Arc<OrderService<S>>>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    let orders = service.list(query.limit).await?;
    Ok(Json(orders))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 200, description = "Order placed", body = OrderSummary),
        (status = 400, description = "Malformed product identifier", body = ErrorResponse),
        (status = 404, description = "Referenced product does not exist", body = ErrorResponse),
        (status = 422, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_order<S: DocumentStore>(
    State(service): State<Arc<OrderService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> AppResult<Json<OrderSummary>> {
    let summary = service.create(input).await?;
    Ok(Json(summary))
}
