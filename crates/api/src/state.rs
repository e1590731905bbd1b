use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::FileStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: spotlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Public file store for uploaded spot pictures.
    pub storage: Arc<FileStorage>,
}
