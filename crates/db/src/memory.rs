//! Ephemeral in-process backend.
//!
//! Each collection is an insertion-ordered map keyed by record id. Contents
//! are lost when the process exits.

use std::cmp::Reverse;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::collection::{Collection, Filter, Patch, Record, SortOrder};
use crate::error::StoreError;

/// In-memory [`Collection`] guarded by a read/write lock.
pub struct MemoryCollection<T> {
    records: RwLock<IndexMap<String, T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }
}

impl<T: Record> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_object<T: Record>(record: &T) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Encoding(format!(
            "{} record serialized to a non-object: {other}",
            T::COLLECTION
        ))),
    }
}

fn from_object<T: Record>(doc: Map<String, Value>) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

fn matching<'a, T: Record>(
    records: &'a IndexMap<String, T>,
    filter: &Filter,
) -> Result<Vec<&'a T>, StoreError> {
    let mut out = Vec::new();
    for record in records.values() {
        if filter.matches(&to_object(record)?) {
            out.push(record);
        }
    }
    Ok(out)
}

/// Order `records` (given in insertion order) by the collection's sort spec.
///
/// Descending listings put the most recently inserted record first among
/// equal sort keys.
fn sort_canonical<T: Record>(mut records: Vec<T>) -> Vec<T> {
    match T::SORT.map(|spec| spec.order) {
        None => {}
        Some(SortOrder::Ascending) => records.sort_by_key(|r| r.sort_key()),
        Some(SortOrder::Descending) => {
            records.reverse();
            records.sort_by_key(|r| Reverse(r.sort_key()));
        }
    }
    records
}

#[async_trait]
impl<T: Record> Collection<T> for MemoryCollection<T> {
    async fn list(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        let found = matching(&records, filter)?.into_iter().cloned().collect();
        Ok(sort_canonical(found))
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(matching(&records, filter)?.first().map(|r| (*r).clone()))
    }

    async fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn insert(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(record.key()) {
            return Err(StoreError::Duplicate {
                collection: T::COLLECTION,
                key: record.key().to_string(),
            });
        }
        records.insert(record.key().to_string(), record.clone());
        Ok(())
    }

    async fn update(
        &self,
        key: &str,
        patch: &Patch,
        upsert: bool,
    ) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(existing) => {
                let mut doc = to_object(existing)?;
                doc.extend(patch.set.clone());
                *existing = from_object(doc)?;
                Ok(Some(existing.clone()))
            }
            None if upsert => {
                let mut doc = patch.on_insert.clone();
                doc.extend(patch.set.clone());
                doc.insert(T::KEY_FIELD.to_string(), Value::String(key.to_string()));
                let created: T = from_object(doc)?;
                records.insert(key.to_string(), created.clone());
                Ok(Some(created))
            }
            None => Ok(None),
        }
    }

    async fn update_many(&self, filter: &Filter, patch: &Patch) -> Result<u64, StoreError> {
        let mut records = self.records.write().await;
        let mut changed = 0;
        for record in records.values_mut() {
            let mut doc = to_object(record)?;
            if !filter.matches(&doc) {
                continue;
            }
            doc.extend(patch.set.clone());
            *record = from_object(doc)?;
            changed += 1;
        }
        Ok(changed)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.read().await.len() as u64)
    }
}
