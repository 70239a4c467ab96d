//! Handler tests for the Products domain
//!
//! These tests exercise the HTTP layer against the in-memory store:
//! request deserialization, response serialization, status codes, and
//! error bodies.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::{handlers, Product, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

use database::MemoryStore;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(store: Arc<MemoryStore>) -> axum::Router {
    handlers::router(ProductService::new(store))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn sample_product() -> Value {
    json!({
        "title": "Pen",
        "description": "Blue ink",
        "price": 1.5,
        "category": "office",
    })
}

#[tokio::test]
async fn test_create_product_returns_200_with_id() {
    let store = Arc::new(MemoryStore::new());

    let response = app(store.clone())
        .oneshot(post_json("/", sample_product()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);

    // A second create yields a distinct identifier.
    let response = app(store)
        .oneshot(post_json("/", sample_product()))
        .await
        .unwrap();
    let second: Value = json_body(response.into_body()).await;
    assert_ne!(second["id"], body["id"]);
}

#[tokio::test]
async fn test_created_product_roundtrips_through_get() {
    let store = Arc::new(MemoryStore::new());

    let response = app(store.clone())
        .oneshot(post_json("/", sample_product()))
        .await
        .unwrap();
    let created: Value = json_body(response.into_body()).await;
    let id = created["id"].as_str().unwrap();

    let response = app(store).oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, id);
    assert_eq!(product.title, "Pen");
    assert_eq!(product.price, 1.5);
    assert_eq!(product.category, "office");
    assert!(product.in_stock);
    assert!(product.created_at.is_some());
    assert!(product.updated_at.is_some());
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let store = Arc::new(MemoryStore::new());

    // Empty title
    let response = app(store.clone())
        .oneshot(post_json("/", json!({ "title": "", "price": 1.0, "category": "office" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Negative price
    let response = app(store.clone())
        .oneshot(post_json(
            "/",
            json!({ "title": "Pen", "price": -1.0, "category": "office" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Missing required field
    let response = app(store.clone())
        .oneshot(post_json("/", json!({ "price": 1.0, "category": "office" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was written.
    assert_eq!(store.count("product"), 0);
}

#[tokio::test]
async fn test_get_malformed_id_returns_400() {
    let store = Arc::new(MemoryStore::new());

    let response = app(store).oneshot(get("/not-an-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Invalid product id");
}

#[tokio::test]
async fn test_get_absent_id_returns_404() {
    let store = Arc::new(MemoryStore::new());
    let absent = mongodb::bson::oid::ObjectId::new().to_hex();

    let response = app(store).oneshot(get(&format!("/{}", absent))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn test_list_products_filters_by_category() {
    let store = Arc::new(MemoryStore::new());

    for (title, category) in [("Pen", "office"), ("Lamp", "home"), ("Ink", "office")] {
        let response = app(store.clone())
            .oneshot(post_json(
                "/",
                json!({ "title": title, "price": 1.0, "category": category }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app(store.clone()).oneshot(get("/")).await.unwrap();
    let all: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(all.len(), 3);

    let response = app(store.clone())
        .oneshot(get("/?category=office"))
        .await
        .unwrap();
    let office: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(office.len(), 2);
    assert!(office.iter().all(|p| p.category == "office"));

    // Exact match only.
    let response = app(store.clone()).oneshot(get("/?category=off")).await.unwrap();
    let partial: Vec<Product> = json_body(response.into_body()).await;
    assert!(partial.is_empty());

    // A present-but-empty category is no filter at all.
    let response = app(store).oneshot(get("/?category=")).await.unwrap();
    let unfiltered: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(unfiltered.len(), 3);
}

#[tokio::test]
async fn test_unconfigured_store_returns_500() {
    let store = Arc::new(MemoryStore::unavailable());

    let response = app(store.clone())
        .oneshot(post_json("/", sample_product()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Database not configured");

    let response = app(store).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
