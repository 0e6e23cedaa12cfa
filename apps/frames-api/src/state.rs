use std::sync::Arc;

use crate::config::Config;
use crate::provider::RenderProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only provider handle built once at startup. Tests swap in a stub.
    pub provider: Arc<dyn RenderProvider>,
}
