//! Order service - business logic layer

use std::sync::Arc;
use tracing::instrument;

use axum_helpers::{AppError, AppResult};
use database::{to_api_json, DocumentId, DocumentStore, Timestamps};
use mongodb::bson::{doc, Bson, Document};

use crate::models::{CreateOrder, OrderSummary};

/// Collection holding order documents.
pub const COLLECTION: &str = "order";

/// Collection the order items reference for pricing.
const PRODUCT_COLLECTION: &str = "product";

/// Default page size when listing orders.
pub const DEFAULT_LIMIT: i64 = 50;

/// Business logic over the order collection.
pub struct OrderService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> OrderService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.store.is_connected() {
            Ok(())
        } else {
            Err(AppError::StorageUnavailable)
        }
    }

    /// Place an order.
    ///
    /// Every referenced product is resolved before anything is written, so
    /// a bad item leaves no partial order behind. The total is priced from
    /// the catalog at placement time and rounded to two decimal places
    /// exactly once, after summing.
    #[instrument(skip(self, input), fields(items = input.items.len()))]
    pub async fn create(&self, input: CreateOrder) -> AppResult<OrderSummary> {
        self.ensure_available()?;

        let mut total = 0.0_f64;
        for item in &input.items {
            let id = DocumentId::parse(&item.product_id).map_err(|_| {
                AppError::InvalidIdentifier(format!("Invalid product id: {}", item.product_id))
            })?;

            let product = self
                .store
                .find_one(PRODUCT_COLLECTION, &id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Product not found: {}", item.product_id))
                })?;

            total += number_field(&product, "price") * item.quantity as f64;
        }
        let total = (total * 100.0).round() / 100.0;

        let mut document =
            mongodb::bson::to_document(&input).map_err(|e| AppError::Storage(e.to_string()))?;
        document.insert("total", total);
        document.insert("currency", "USD");

        let stored = self
            .store
            .insert(COLLECTION, document, Timestamps::Created)
            .await?;

        summary_from_document(&stored)
    }

    /// List orders, most recent first.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: Option<i64>) -> AppResult<Vec<OrderSummary>> {
        self.ensure_available()?;

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let documents = self
            .store
            .find(COLLECTION, doc! {}, Some("created_at".to_string()), Some(limit))
            .await?;

        documents.iter().map(summary_from_document).collect()
    }
}

/// Numeric field access tolerant of the integer encodings a document may
/// carry; anything non-numeric prices as zero.
fn number_field(document: &Document, field: &str) -> f64 {
    match document.get(field) {
        Some(Bson::Double(v)) => *v,
        Some(Bson::Int32(v)) => f64::from(*v),
        Some(Bson::Int64(v)) => *v as f64,
        _ => 0.0,
    }
}

fn summary_from_document(document: &Document) -> AppResult<OrderSummary> {
    serde_json::from_value(to_api_json(document)).map_err(|e| AppError::Storage(e.to_string()))
}
