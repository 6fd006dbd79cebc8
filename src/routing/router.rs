//! Exact-match request router
//!
//! A table from literal path to handler. There is no wildcard or prefix
//! matching: a path either has a binding or falls through to the not-found
//! handler. `/` is an ordinary exact-match entry, not a catch-all.

use std::collections::HashMap;
use std::sync::Arc;

use crate::handler::{Handler, NotFoundHandler};

pub struct Router {
    routes: HashMap<String, Arc<dyn Handler>>,
    fallback: Arc<dyn Handler>,
}

impl Router {
    /// Create an empty router with the 404 fallback in place.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: Arc::new(NotFoundHandler),
        }
    }

    /// Bind `path` to `handler`. Registering the same path again replaces
    /// the prior binding (last write wins).
    ///
    /// Not synchronized: all registration happens on the bootstrap path
    /// before the server starts accepting connections.
    pub fn register(&mut self, path: impl Into<String>, handler: Arc<dyn Handler>) {
        self.routes.insert(path.into(), handler);
    }

    /// Resolve a request path to its handler, or the fallback when nothing
    /// matches exactly.
    pub fn resolve(&self, path: &str) -> &dyn Handler {
        match self.routes.get(path) {
            Some(handler) => handler.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// Number of registered routes, fallback excluded.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
