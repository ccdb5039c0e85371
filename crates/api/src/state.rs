use std::sync::Arc;

use rigor_llm::DiagnosisBackend;

use crate::config::ServerConfig;
use crate::engine::locks::RunLocks;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rigor_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Language-model backend used by diagnosis runs.
    pub backend: Arc<dyn DiagnosisBackend>,
    /// Per-project serialization of diagnosis runs.
    pub run_locks: Arc<RunLocks>,
}
