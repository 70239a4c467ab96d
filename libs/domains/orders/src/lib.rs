//! Orders Domain
//!
//! Order placement and listing over a document store. An order references
//! products by identifier; the total is computed server-side from the
//! current catalog prices at placement time and stored denormalized on the
//! order document.

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use handlers::ApiDoc;
pub use models::{CreateOrder, Customer, OrderItem, OrderSummary};
pub use service::OrderService;
