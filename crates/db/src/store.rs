//! The four collections of one process, behind whichever backend is active.

use std::fmt;
use std::sync::Arc;

use sara_core::clock::{Clock, SystemClock};
use sara_core::ids::{IdSource, RandomIds};
use serde::Serialize;
use tokio::sync::{Mutex, OnceCell};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::memory::MemoryCollection;
use crate::models::alert::Alert;
use crate::models::site::Site;
use crate::models::toolbox_talk::ToolboxTalk;
use crate::models::user::User;
use crate::mongo::{self, MongoCollection};

/// Which backend a [`Store`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    MongoDb,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::MongoDb => "mongodb",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub sites: u64,
    pub users: u64,
    pub alerts: u64,
    pub toolbox_talks: u64,
}

/// Collections plus the id source and clock used to stamp new records.
///
/// Cheaply cloneable; clones share the same collections.
#[derive(Clone)]
pub struct Store {
    pub sites: Arc<dyn Collection<Site>>,
    pub users: Arc<dyn Collection<User>>,
    pub alerts: Arc<dyn Collection<Alert>>,
    pub toolbox_talks: Arc<dyn Collection<ToolboxTalk>>,
    pub ids: Arc<dyn IdSource>,
    pub clock: Arc<dyn Clock>,
    backend: Backend,
    alert_gate: Arc<Mutex<()>>,
}

impl Store {
    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            sites: Arc::new(MemoryCollection::<Site>::new()),
            users: Arc::new(MemoryCollection::<User>::new()),
            alerts: Arc::new(MemoryCollection::<Alert>::new()),
            toolbox_talks: Arc::new(MemoryCollection::<ToolboxTalk>::new()),
            ids: Arc::new(RandomIds),
            clock: Arc::new(SystemClock),
            backend: Backend::Memory,
            alert_gate: Arc::new(Mutex::new(())),
        }
    }

    /// A store over the collections of a connected MongoDB database.
    pub fn mongo(db: &mongodb::Database) -> Self {
        Self {
            sites: Arc::new(MongoCollection::<Site>::new(db)),
            users: Arc::new(MongoCollection::<User>::new(db)),
            alerts: Arc::new(MongoCollection::<Alert>::new(db)),
            toolbox_talks: Arc::new(MongoCollection::<ToolboxTalk>::new(db)),
            ids: Arc::new(RandomIds),
            clock: Arc::new(SystemClock),
            backend: Backend::MongoDb,
            alert_gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Serializes alert supersession within this process.
    pub(crate) fn alert_gate(&self) -> &Mutex<()> {
        &self.alert_gate
    }

    pub async fn counts(&self) -> Result<StoreCounts, StoreError> {
        Ok(StoreCounts {
            sites: self.sites.count().await?,
            users: self.users.count().await?,
            alerts: self.alerts.count().await?,
            toolbox_talks: self.toolbox_talks.count().await?,
        })
    }
}

/// Open a MongoDB-backed store, creating the key indexes.
pub async fn connect_mongo(uri: &str) -> Result<Store, StoreError> {
    let db = mongo::connect(uri).await?;
    mongo::ensure_key_index::<Site>(&db).await?;
    mongo::ensure_key_index::<User>(&db).await?;
    mongo::ensure_key_index::<Alert>(&db).await?;
    mongo::ensure_key_index::<ToolboxTalk>(&db).await?;
    Ok(Store::mongo(&db))
}

/// Picks the backend on first use and keeps it for the process lifetime.
///
/// With a connection string the document store is tried once; any failure
/// falls back to memory for good.
pub struct StoreResolver {
    database_url: Option<String>,
    cell: OnceCell<Store>,
}

impl StoreResolver {
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            cell: OnceCell::new(),
        }
    }

    /// A resolver already settled on `store`.
    pub fn resolved(store: Store) -> Self {
        Self {
            database_url: None,
            cell: OnceCell::new_with(Some(store)),
        }
    }

    pub async fn get(&self) -> &Store {
        self.cell.get_or_init(|| self.resolve()).await
    }

    async fn resolve(&self) -> Store {
        let Some(url) = self.database_url.as_deref() else {
            tracing::info!(backend = %Backend::Memory, "No document store configured");
            return Store::in_memory();
        };

        match connect_mongo(url).await {
            Ok(store) => {
                tracing::info!(backend = %Backend::MongoDb, "Storage backend selected");
                store
            }
            Err(e) => {
                tracing::warn!(error = %e, backend = %Backend::Memory, "Document store unavailable, falling back");
                Store::in_memory()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolver_without_url_uses_memory() {
        let resolver = StoreResolver::new(None);
        assert_eq!(resolver.get().await.backend(), Backend::Memory);
    }

    #[tokio::test]
    async fn resolver_falls_back_when_url_is_unparseable() {
        let resolver = StoreResolver::new(Some("not-a-mongodb-uri".into()));
        assert_eq!(resolver.get().await.backend(), Backend::Memory);
    }

    #[tokio::test]
    async fn resolver_caches_the_first_store() {
        let resolver = StoreResolver::new(None);
        let first = resolver.get().await.clone();
        let second = resolver.get().await;
        assert!(Arc::ptr_eq(&first.sites, &second.sites));
    }

    #[tokio::test]
    async fn counts_start_at_zero() {
        let counts = Store::in_memory().counts().await.unwrap();
        assert_eq!(
            counts,
            StoreCounts {
                sites: 0,
                users: 0,
                alerts: 0,
                toolbox_talks: 0
            }
        );
    }
}
