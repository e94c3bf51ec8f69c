use std::sync::Arc;

use sara_db::{Store, StoreResolver};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Lazily resolved storage backend.
    pub resolver: Arc<StoreResolver>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(resolver: StoreResolver, config: ServerConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }

    /// The active store, resolving the backend on first call.
    pub async fn store(&self) -> &Store {
        self.resolver.get().await
    }
}
