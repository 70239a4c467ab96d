//! In-memory implementation of the document store contract.
//!
//! Used by tests as a deterministic substitute for MongoDB. The contract is
//! identical: store-assigned ObjectId identifiers, server-side timestamp
//! stamping, equality filters, descending single-field sort, and a limit.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, DateTime, Document};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::store::{DocumentId, DocumentStore, Timestamps};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with no configured connection: every operation fails with
    /// [`StoreError::Unavailable`]. Lets tests exercise 500 paths.
    pub fn unavailable() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            unavailable: true,
        }
    }

    /// Number of documents currently held in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|map| map.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

fn numeric(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

fn cmp_values(a: &Bson, b: &Bson) -> Ordering {
    match (a, b) {
        (Bson::DateTime(x), Bson::DateTime(y)) => x.cmp(y),
        (Bson::String(x), Bson::String(y)) => x.cmp(y),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => x.bytes().cmp(&y.bytes()),
        (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
        _ => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

fn cmp_field(a: &Document, b: &Document, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(x), Some(y)) => cmp_values(x, y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn is_connected(&self) -> bool {
        !self.unavailable
    }

    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
        stamps: Timestamps,
    ) -> StoreResult<Document> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        document.remove("_id");
        document.remove("created_at");
        document.remove("updated_at");
        let now = DateTime::now();
        document.insert("created_at", now);
        if stamps == Timestamps::CreatedUpdated {
            document.insert("updated_at", now);
        }
        document.insert("_id", ObjectId::new());

        let mut map = self
            .collections
            .write()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;
        map.entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn find_one(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Document>> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;

        let found = map.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|doc| {
                    doc.get_object_id("_id")
                        .map(|oid| oid == id.as_object_id())
                        .unwrap_or(false)
                })
                .cloned()
        });

        Ok(found)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort_desc: Option<String>,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;

        let mut results: Vec<Document> = map
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|doc| matches_filter(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(field) = sort_desc {
            // Descending; ties broken by _id so ordering stays deterministic
            // when timestamps collide within one millisecond.
            results.sort_by(|a, b| {
                cmp_field(b, a, &field).then_with(|| cmp_field(b, a, "_id"))
            });
        }

        if let Some(n) = limit {
            if n > 0 {
                results.truncate(n as usize);
            }
        }

        Ok(results)
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;

        Ok(map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_unique_ids_and_timestamps() {
        let store = MemoryStore::new();

        let first = store
            .insert("product", doc! { "title": "Pen" }, Timestamps::CreatedUpdated)
            .await
            .unwrap();
        let second = store
            .insert("product", doc! { "title": "Ink" }, Timestamps::CreatedUpdated)
            .await
            .unwrap();

        let first_id = first.get_object_id("_id").unwrap();
        let second_id = second.get_object_id("_id").unwrap();
        assert_ne!(first_id, second_id);
        assert!(first.get_datetime("created_at").is_ok());
        assert!(first.get_datetime("updated_at").is_ok());
    }

    #[tokio::test]
    async fn test_insert_created_only_omits_updated_at() {
        let store = MemoryStore::new();

        let stored = store
            .insert("order", doc! { "total": 4.5 }, Timestamps::Created)
            .await
            .unwrap();

        assert!(stored.get_datetime("created_at").is_ok());
        assert!(stored.get("updated_at").is_none());
    }

    #[tokio::test]
    async fn test_insert_discards_client_supplied_id_and_timestamps() {
        let store = MemoryStore::new();
        let forged = ObjectId::new();

        let stored = store
            .insert(
                "product",
                doc! { "_id": forged, "created_at": "1999-01-01", "title": "Pen" },
                Timestamps::CreatedUpdated,
            )
            .await
            .unwrap();

        assert_ne!(stored.get_object_id("_id").unwrap(), forged);
        assert!(stored.get_datetime("created_at").is_ok());
    }

    #[tokio::test]
    async fn test_find_one_absent_is_none_not_error() {
        let store = MemoryStore::new();
        let id = DocumentId::from(ObjectId::new());

        let found = store.find_one("product", &id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_one_returns_inserted_document() {
        let store = MemoryStore::new();
        let stored = store
            .insert("product", doc! { "title": "Pen" }, Timestamps::CreatedUpdated)
            .await
            .unwrap();
        let id = DocumentId::from(stored.get_object_id("_id").unwrap());

        let found = store.find_one("product", &id).await.unwrap().unwrap();
        assert_eq!(found.get_str("title").unwrap(), "Pen");
    }

    #[tokio::test]
    async fn test_find_filters_by_exact_equality() {
        let store = MemoryStore::new();
        for (title, category) in [("Pen", "office"), ("Lamp", "home"), ("Ink", "office")] {
            store
                .insert(
                    "product",
                    doc! { "title": title, "category": category },
                    Timestamps::CreatedUpdated,
                )
                .await
                .unwrap();
        }

        let office = store
            .find("product", doc! { "category": "office" }, None, None)
            .await
            .unwrap();
        assert_eq!(office.len(), 2);

        // Case-sensitive, no partial match.
        let upper = store
            .find("product", doc! { "category": "Office" }, None, None)
            .await
            .unwrap();
        assert!(upper.is_empty());
    }

    #[tokio::test]
    async fn test_find_sorts_descending_and_limits() {
        let store = MemoryStore::new();
        for n in 1..=3_i64 {
            store
                .insert("order", doc! { "total": n as f64 }, Timestamps::Created)
                .await
                .unwrap();
        }

        let recent = store
            .find("order", doc! {}, Some("created_at".to_string()), Some(2))
            .await
            .unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].get_f64("total").unwrap(), 3.0);
        assert_eq!(recent[1].get_f64("total").unwrap(), 2.0);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let store = MemoryStore::unavailable();
        assert!(!store.is_connected());

        let err = store
            .insert("product", doc! {}, Timestamps::Created)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));

        let err = store.find("product", doc! {}, None, None).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));

        let err = store.collection_names().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
    }

    #[tokio::test]
    async fn test_collection_names_lists_created_collections() {
        let store = MemoryStore::new();
        store
            .insert("product", doc! {}, Timestamps::CreatedUpdated)
            .await
            .unwrap();
        store
            .insert("order", doc! {}, Timestamps::Created)
            .await
            .unwrap();

        let mut names = store.collection_names().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["order".to_string(), "product".to_string()]);
    }
}
