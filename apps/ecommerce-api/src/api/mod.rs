//! Route composition for the Ecommerce API

pub mod diagnostics;

use axum::{routing::get, Json, Router};
use database::DocumentStore;
use domain_orders::OrderService;
use domain_products::ProductService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the full application router over a shared document store.
///
/// Generic over the store so tests can run the whole surface against the
/// in-memory implementation.
pub fn app<S: DocumentStore + 'static>(store: Arc<S>) -> Router {
    let products = domain_products::handlers::router(ProductService::new(store.clone()));
    let orders = domain_orders::handlers::router(OrderService::new(store.clone()));

    let liveness = Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/test", get(diagnostics::database_report::<S>))
        .with_state(store);

    liveness
        .nest("/api/products", products)
        .nest("/api/orders", orders)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .fallback(axum_helpers::errors::handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Ecommerce Backend Running" }))
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}
