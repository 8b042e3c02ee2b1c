use std::sync::Arc;

use crate::backend_client::BackendClient;
use crate::cache::DropdownCache;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    /// Dropdown cache. Redis when configured, otherwise in-process.
    pub cache: Arc<dyn DropdownCache>,
    pub config: Config,
}
