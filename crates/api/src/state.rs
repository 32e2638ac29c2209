use std::sync::Arc;

use camrelay_angelcam::AngelcamApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; everything is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (signing key, upstream settings).
    pub config: Arc<ServerConfig>,
    /// Upstream API client (one pooled `reqwest::Client`).
    pub angelcam: Arc<AngelcamApi>,
}
