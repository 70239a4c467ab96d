//! Product service - business logic layer

use std::sync::Arc;
use tracing::instrument;

use axum_helpers::{AppError, AppResult};
use database::{to_api_json, DocumentId, DocumentStore, Timestamps};
use mongodb::bson::{doc, Document};

use crate::models::{CreateProduct, CreatedResponse, Product};

/// Collection holding product documents.
pub const COLLECTION: &str = "product";

/// Business logic over the product collection.
///
/// Generic over the store so handlers can be exercised against the
/// in-memory implementation.
pub struct ProductService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ProductService<S> {
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

    /// Create a product and return its new identifier.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateProduct) -> AppResult<CreatedResponse> {
        self.ensure_available()?;

        let document =
            mongodb::bson::to_document(&input).map_err(|e| AppError::Storage(e.to_string()))?;
        let stored = self
            .store
            .insert(COLLECTION, document, Timestamps::CreatedUpdated)
            .await?;

        let id = stored
            .get_object_id("_id")
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(CreatedResponse { id: id.to_hex() })
    }

    /// Fetch a product by its identifier string.
    ///
    /// A malformed identifier is rejected before any query is issued.
    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> AppResult<Product> {
        self.ensure_available()?;

        let id = DocumentId::parse(raw_id)
            .map_err(|_| AppError::InvalidIdentifier("Invalid product id".to_string()))?;

        let document = self
            .store
            .find_one(COLLECTION, &id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        product_from_document(&document)
    }

    /// List products, optionally filtered by exact category match.
    #[instrument(skip(self))]
    pub async fn list(&self, category: Option<String>) -> AppResult<Vec<Product>> {
        self.ensure_available()?;

        // An empty category means "no filter", not "category equals empty".
        let filter = match category.as_deref() {
            Some(c) if !c.is_empty() => doc! { "category": c },
            _ => doc! {},
        };

        let documents = self.store.find(COLLECTION, filter, None, None).await?;
        documents.iter().map(product_from_document).collect()
    }
}

fn product_from_document(document: &Document) -> AppResult<Product> {
    serde_json::from_value(to_api_json(document)).map_err(|e| AppError::Storage(e.to_string()))
}
