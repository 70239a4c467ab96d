use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{DateTime, Document, doc};
use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::store::{DocumentId, DocumentStore, Timestamps};

/// Document store backed by a MongoDB database handle.
///
/// Holding `None` is a valid state: the service was started without a
/// configured connection, and every operation fails with
/// [`StoreError::Unavailable`] instead of panicking at startup.
#[derive(Clone)]
pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    pub fn new(db: Option<Database>) -> Self {
        Self { db }
    }

    fn db(&self) -> StoreResult<&Database> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    #[instrument(skip(self, document))]
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
        stamps: Timestamps,
    ) -> StoreResult<Document> {
        let db = self.db()?;

        document.remove("_id");
        document.remove("created_at");
        document.remove("updated_at");
        let now = DateTime::now();
        document.insert("created_at", now);
        if stamps == Timestamps::CreatedUpdated {
            document.insert("updated_at", now);
        }

        let result = db
            .collection::<Document>(collection)
            .insert_one(&document)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Database("insert returned a non-ObjectId _id".to_string()))?;
        document.insert("_id", id);

        Ok(document)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, collection: &str, id: &DocumentId) -> StoreResult<Option<Document>> {
        let db = self.db()?;

        let found = db
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(found)
    }

    #[instrument(skip(self, filter))]
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort_desc: Option<String>,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        let db = self.db()?;

        let collection = db.collection::<Document>(collection);
        let mut query = collection.find(filter);
        if let Some(field) = sort_desc {
            // Ties broken by _id so paging stays stable when timestamps
            // collide within one millisecond.
            query = query.sort(doc! { field: -1, "_id": -1 });
        }
        if let Some(n) = limit {
            query = query.limit(n);
        }

        let documents = query.await?.try_collect().await?;
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let db = self.db()?;
        let names = db.list_collection_names().await?;
        Ok(names)
    }
}
