use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use std::fmt;

use crate::error::{StoreError, StoreResult};

/// An opaque, store-assigned document identifier.
///
/// Wraps the underlying ObjectId so that parsing (string → identifier) stays
/// separate from lookup (identifier → document): `parse` fails with
/// [`StoreError::InvalidId`], lookup of a well-formed but absent identifier
/// yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Parse an identifier from its canonical string form.
    pub fn parse(raw: &str) -> StoreResult<Self> {
        ObjectId::parse_str(raw)
            .map(DocumentId)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// Canonical string form of the identifier.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        DocumentId(oid)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Which server-side timestamps an insert stamps onto the document.
///
/// Immutable collections (orders) carry only `created_at`; mutable
/// collections (products) also carry `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamps {
    Created,
    CreatedUpdated,
}

/// Data access contract over named document collections.
///
/// Implementations must be safe for concurrent use by multiple in-flight
/// requests; the store itself serializes conflicting writes and no
/// additional locking is layered on top.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Availability probe. `false` when no connection is configured;
    /// callers check this before issuing operations.
    fn is_connected(&self) -> bool;

    /// Append a new document, stamping server-side timestamps and letting
    /// the store assign a fresh `_id`. Client-supplied `_id` or timestamp
    /// fields are discarded. Returns the document as stored.
    async fn insert(
        &self,
        collection: &str,
        document: Document,
        stamps: Timestamps,
    ) -> StoreResult<Document>;

    /// Fetch a single document by identifier. `None` when absent.
    async fn find_one(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Document>>;

    /// List documents matching an exact-match equality filter over top-level
    /// fields. `sort_desc` sorts by a single field, descending, before
    /// `limit` truncates. The result is materialized at call time.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort_desc: Option<String>,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>>;

    /// Names of all collections in the store. Used by diagnostics only.
    async fn collection_names(&self) -> StoreResult<Vec<String>>;
}
