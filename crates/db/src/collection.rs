//! Backend-neutral collection contract.
//!
//! Filters and patches are expressed over the records' serialized (camelCase)
//! field names so that the in-memory backend can evaluate them against
//! `serde_json` values and the MongoDB backend can hand them to the server
//! verbatim.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Direction of a collection's canonical listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// MongoDB sort direction (`1` / `-1`).
    pub fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Field a collection is listed by.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: &'static str,
    pub order: SortOrder,
}

/// A flat document stored in one of the four collections.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection name in the document store.
    const COLLECTION: &'static str;

    /// Serialized name of the key field.
    const KEY_FIELD: &'static str = "id";

    /// Listing order, or `None` for insertion order.
    const SORT: Option<SortSpec>;

    fn key(&self) -> &str;

    /// Value of the [`Record::SORT`] field.
    fn sort_key(&self) -> i64 {
        0
    }
}

/// Conjunction of top-level field equality clauses.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(&'static str, Value)>,
}

impl Filter {
    /// Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality clause on `field`.
    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.clauses.push((field, value.into()));
        self
    }

    pub fn clauses(&self) -> &[(&'static str, Value)] {
        &self.clauses
    }

    /// Returns `true` if the serialized record satisfies every clause.
    pub fn matches(&self, doc: &Map<String, Value>) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(*field).unwrap_or(&Value::Null) == value)
    }

    /// The clauses as a JSON object.
    pub fn to_map(&self) -> Map<String, Value> {
        self.clauses
            .iter()
            .map(|(field, value)| ((*field).to_string(), value.clone()))
            .collect()
    }
}

/// Field assignments applied by an update.
///
/// `set` is applied to every matched record; `on_insert` supplies defaults
/// only when an upsert creates a new record, so existing values survive.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub set: Map<String, Value>,
    pub on_insert: Map<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `field` on every matched record.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set.insert(field.to_string(), value.into());
        self
    }

    /// Assign `field` only on a record created by an upsert.
    pub fn on_insert(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.on_insert.insert(field.to_string(), value.into());
        self
    }
}

/// Storage capability shared by both backends.
#[async_trait]
pub trait Collection<T: Record>: Send + Sync {
    /// Records matching `filter`, in the collection's canonical order.
    async fn list(&self, filter: &Filter) -> Result<Vec<T>, StoreError>;

    /// First record matching `filter`.
    async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError>;

    /// Record with the given key.
    async fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.find_one(&Filter::all().eq(T::KEY_FIELD, key)).await
    }

    async fn insert(&self, record: &T) -> Result<(), StoreError>;

    /// Apply `patch` to the record with the given key.
    ///
    /// With `upsert`, a missing record is created from the patch. Returns the
    /// resulting record, or `None` if nothing matched and `upsert` was false.
    async fn update(&self, key: &str, patch: &Patch, upsert: bool)
        -> Result<Option<T>, StoreError>;

    /// Apply `patch.set` to every record matching `filter`, returning how many
    /// records changed.
    async fn update_many(&self, filter: &Filter, patch: &Patch) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test documents are objects"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::all().matches(&doc(json!({ "id": "a" }))));
    }

    #[test]
    fn filter_requires_every_clause() {
        let filter = Filter::all().eq("siteId", "s1").eq("active", true);
        assert!(filter.matches(&doc(json!({ "siteId": "s1", "active": true }))));
        assert!(!filter.matches(&doc(json!({ "siteId": "s1", "active": false }))));
        assert!(!filter.matches(&doc(json!({ "siteId": "s2", "active": true }))));
    }

    #[test]
    fn filter_on_missing_field_only_matches_null() {
        let record = doc(json!({ "id": "u1" }));
        assert!(Filter::all().eq("siteId", Value::Null).matches(&record));
        assert!(!Filter::all().eq("siteId", "s1").matches(&record));
    }

    #[test]
    fn patch_keeps_set_and_insert_defaults_apart() {
        let patch = Patch::new().set("name", "Ana").on_insert("acknowledged", false);
        assert_eq!(patch.set.get("name"), Some(&json!("Ana")));
        assert!(!patch.set.contains_key("acknowledged"));
        assert_eq!(patch.on_insert.get("acknowledged"), Some(&json!(false)));
    }
}
