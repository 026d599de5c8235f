use std::sync::Arc;

use crate::config::Config;
use crate::loader::Loader;

/// Shared preview-server state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Session loader; holds the profile when the startup build succeeded.
    pub loader: Arc<Loader>,
    /// Page produced by the startup build (populated, or carrying the failure notice).
    pub page: Arc<String>,
    pub config: Config,
}
