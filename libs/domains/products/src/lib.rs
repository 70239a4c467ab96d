//! Products Domain
//!
//! Catalog management over a document store: create a product, fetch one by
//! identifier, and list with an optional exact-match category filter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, identifier parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ DocumentStore│ ← Data access (MongoDB or in-memory)
//! └─────────────┘
//! ```

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use handlers::ApiDoc;
pub use models::{CreateProduct, CreatedResponse, Product};
pub use service::ProductService;
