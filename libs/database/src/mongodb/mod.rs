//! MongoDB implementation of the document store contract.
//!
//! Provides connection configuration, a lazy connector, and [`MongoStore`].

mod config;
mod connector;
mod store;

pub use config::MongoConfig;
pub use connector::connect;
pub use store::MongoStore;

// Re-export driver types for convenience
pub use mongodb::{Client, Collection, Database};
