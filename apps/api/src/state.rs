use std::sync::Arc;

use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed in production, in-memory when no database is configured.
    pub store: Arc<dyn ProfileStore>,
}
