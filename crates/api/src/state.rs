use std::sync::Arc;

use idol_db::IdolStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store holding idols.
    pub store: Arc<dyn IdolStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
