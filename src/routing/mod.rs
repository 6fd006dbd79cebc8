//! Routing module
//!
//! Exact-match dispatch table from request path to handler.

mod router;

pub use router::Router;
