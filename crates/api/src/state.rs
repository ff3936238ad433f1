use std::sync::Arc;

use buildnote_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store is a handle onto shared tables, the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory dataset backing every endpoint.
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
