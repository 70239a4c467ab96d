//! Document store access for the ecommerce services.
//!
//! This library defines the [`DocumentStore`] contract — insert, lookup by
//! identifier, and equality-filtered listing over named collections — plus
//! two implementations:
//!
//! - [`MongoStore`]: backed by a MongoDB database handle. An unconfigured
//!   handle (no `DATABASE_URL` at startup) is a valid state; every operation
//!   then fails with [`StoreError::Unavailable`].
//! - [`MemoryStore`]: a process-local store with the same contract, used for
//!   deterministic tests.
//!
//! Identifier parsing lives in [`DocumentId`] and is strictly separate from
//! lookup: a malformed identifier fails with [`StoreError::InvalidId`] before
//! any query is issued, while a well-formed identifier with no matching
//! document is a `None` result, not an error.

pub mod error;
pub mod memory;
pub mod mongodb;
pub mod serialize;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongodb::{connect, MongoConfig, MongoStore};
pub use serialize::to_api_json;
pub use store::{DocumentId, DocumentStore, Timestamps};
