//! MongoDB document-store backend.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Database, IndexModel};
use serde_json::{Map, Value};

use crate::collection::{Collection, Filter, Patch, Record, SortSpec};
use crate::error::StoreError;

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "sara-alert";

/// How long the initial handshake may wait for a reachable server.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Connect to the database named by `uri` and verify it answers a ping.
pub async fn connect(uri: &str) -> Result<Database, StoreError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    tracing::info!(database = %db.name(), "Document store connection verified");
    Ok(db)
}

/// Create the unique key index for `T`'s collection if it does not exist.
pub async fn ensure_key_index<T: Record>(db: &Database) -> Result<(), StoreError> {
    let mut keys = Document::new();
    keys.insert(T::KEY_FIELD, 1);
    let index = IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build();
    db.collection::<Document>(T::COLLECTION)
        .create_index(index)
        .await?;
    Ok(())
}

fn to_document(map: &Map<String, Value>) -> Result<Document, StoreError> {
    Ok(mongodb::bson::to_document(map)?)
}

fn filter_document(filter: &Filter) -> Result<Document, StoreError> {
    to_document(&filter.to_map())
}

/// Sort for `spec`, with `_id` in the same direction breaking ties so equal
/// keys list in insertion order (or its reverse).
fn sort_document(spec: SortSpec) -> Document {
    let direction = spec.order.direction();
    let mut sort = Document::new();
    sort.insert(spec.field, direction);
    sort.insert("_id", direction);
    sort
}

/// Update operators for `patch`, or `None` when there is nothing to write.
///
/// Insert-only fields go under `$setOnInsert` and only for upserts, so an
/// existing record keeps its values.
fn update_document(patch: &Patch, upsert: bool) -> Result<Option<Document>, StoreError> {
    let mut update = Document::new();
    if !patch.set.is_empty() {
        update.insert("$set", to_document(&patch.set)?);
    }
    if upsert && !patch.on_insert.is_empty() {
        update.insert("$setOnInsert", to_document(&patch.on_insert)?);
    }
    Ok((!update.is_empty()).then_some(update))
}

fn key_filter<T: Record>(key: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(T::KEY_FIELD, key);
    filter
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

/// [`Collection`] backed by a MongoDB collection of the same name.
pub struct MongoCollection<T: Send + Sync> {
    inner: mongodb::Collection<T>,
}

impl<T: Record> MongoCollection<T> {
    pub fn new(db: &Database) -> Self {
        Self {
            inner: db.collection(T::COLLECTION),
        }
    }
}

#[async_trait]
impl<T: Record> Collection<T> for MongoCollection<T> {
    async fn list(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let mut find = self.inner.find(filter_document(filter)?);
        if let Some(spec) = T::SORT {
            find = find.sort(sort_document(spec));
        }
        let cursor = find.await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        Ok(self.inner.find_one(filter_document(filter)?).await?)
    }

    async fn insert(&self, record: &T) -> Result<(), StoreError> {
        match self.inner.insert_one(record).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate {
                collection: T::COLLECTION,
                key: record.key().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        key: &str,
        patch: &Patch,
        upsert: bool,
    ) -> Result<Option<T>, StoreError> {
        let Some(update) = update_document(patch, upsert)? else {
            return self.get(key).await;
        };

        Ok(self
            .inner
            .find_one_and_update(key_filter::<T>(key), update)
            .upsert(upsert)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn update_many(&self, filter: &Filter, patch: &Patch) -> Result<u64, StoreError> {
        // Bulk updates never insert, so only `$set` applies.
        let Some(update) = update_document(patch, false)? else {
            return Ok(0);
        };
        let result = self
            .inner
            .update_many(filter_document(filter)?, update)
            .await?;
        Ok(result.modified_count)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.count_documents(Document::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::Bson;

    use super::*;
    use crate::collection::SortOrder;
    use crate::models::site::Site;

    fn rejoin_patch() -> Patch {
        Patch::new()
            .set("name", "Ana")
            .set("siteId", Value::Null)
            .set("lastActive", 1_767_225_600_000_i64)
            .on_insert("acknowledged", false)
            .on_insert("needsHelp", false)
    }

    #[test]
    fn upsert_puts_defaults_under_set_on_insert_only() {
        let update = update_document(&rejoin_patch(), true).unwrap().unwrap();

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Ana");
        assert_eq!(set.get("siteId"), Some(&Bson::Null));
        assert_eq!(set.get_i64("lastActive").unwrap(), 1_767_225_600_000);
        assert!(!set.contains_key("acknowledged"));
        assert!(!set.contains_key("needsHelp"));

        let on_insert = update.get_document("$setOnInsert").unwrap();
        assert!(!on_insert.get_bool("acknowledged").unwrap());
        assert!(!on_insert.get_bool("needsHelp").unwrap());
    }

    #[test]
    fn plain_update_drops_insert_defaults() {
        let update = update_document(&rejoin_patch(), false).unwrap().unwrap();
        assert!(update.contains_key("$set"));
        assert!(!update.contains_key("$setOnInsert"));
    }

    #[test]
    fn empty_patch_has_no_update() {
        assert_eq!(update_document(&Patch::new(), true).unwrap(), None);

        let insert_only = Patch::new().on_insert("acknowledged", false);
        assert_eq!(update_document(&insert_only, false).unwrap(), None);
    }

    #[test]
    fn descending_sort_breaks_ties_by_id() {
        let sort = sort_document(SortSpec {
            field: "timestamp",
            order: SortOrder::Descending,
        });
        assert_eq!(sort, doc! { "timestamp": -1, "_id": -1 });
        let keys: Vec<&str> = sort.keys().map(String::as_str).collect();
        assert_eq!(keys, ["timestamp", "_id"]);
    }

    #[test]
    fn ascending_sort_keeps_field_first() {
        let sort = sort_document(SortSpec {
            field: "createdAt",
            order: SortOrder::Ascending,
        });
        let keys: Vec<&str> = sort.keys().map(String::as_str).collect();
        assert_eq!(keys, ["createdAt", "_id"]);
        assert_eq!(sort.get_i32("createdAt").unwrap(), 1);
    }

    #[test]
    fn filter_translates_equality_clauses() {
        let filter = Filter::all().eq("siteId", "s1").eq("active", true);
        assert_eq!(
            filter_document(&filter).unwrap(),
            doc! { "siteId": "s1", "active": true }
        );
        assert_eq!(filter_document(&Filter::all()).unwrap(), Document::new());
    }

    #[test]
    fn key_filter_uses_record_key_field() {
        assert_eq!(key_filter::<Site>("s1"), doc! { "id": "s1" });
    }
}
