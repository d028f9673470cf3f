use std::sync::Arc;

use crate::auth::SessionIssuer;
use crate::config::Config;
use crate::storage::ObjectStore;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users and resume metadata. Default: `PgStore`.
    pub store: Arc<dyn Store>,
    /// Resume file bucket. Default: `S3Storage`.
    pub storage: Arc<dyn ObjectStore>,
    pub sessions: SessionIssuer,
    pub config: Config,
}
