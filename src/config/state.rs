// Shared application state
// Built once at startup, immutable afterwards, shared across connections via Arc

use crate::config::Config;
use crate::routing::Router;

/// State shared by every connection task. The router table is read-only
/// after startup, so no synchronization is needed beyond the `Arc`.
pub struct AppState {
    pub config: Config,
    pub router: Router,
}

impl AppState {
    pub fn new(config: Config, router: Router) -> Self {
        Self { config, router }
    }
}
