// Error types module
// Fatal startup errors and the handler-side failure type.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that abort startup. Surfaced to the bootstrap path, which logs
/// them and decides the process exit code. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Port 0 would make the OS pick an ephemeral port; the service always
    /// listens on the port it was asked for.
    #[error("invalid listening port {port} (expected 1-65535)")]
    InvalidPort { port: u16 },

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// A failure while a handler produces its response.
///
/// Never propagates past the dispatch boundary: `handle_request` converts
/// any `HandlerError` (or handler panic) into a 500 response so a single
/// bad request cannot take the process down.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to build response: {0}")]
    Http(#[from] hyper::http::Error),
}
