//! Built-in handlers
//!
//! The two routes this service serves plus the not-found fallback. Each is
//! a named type so it can be tested against a request fixture directly.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::Response;

use super::Handler;
use crate::error::HandlerError;
use crate::http;

/// Body served by [`ApiHandler`], byte-for-byte. The exact text (including
/// the space after the colon) is part of the service contract.
pub const API_GREETING: &str = "{\"message\": \"hello from golang service\"}";

/// Root route: 200 with an empty body, whatever the method.
pub struct RootHandler;

impl Handler for RootHandler {
    fn handle(&self, _req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError> {
        Ok(http::build_empty_response())
    }
}

/// API route: a fixed JSON greeting. The request body is ignored.
pub struct ApiHandler;

impl Handler for ApiHandler {
    fn handle(&self, _req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError> {
        Ok(http::build_json_response(API_GREETING))
    }
}

/// Fallback for paths with no registered handler.
pub struct NotFoundHandler;

impl Handler for NotFoundHandler {
    fn handle(&self, _req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError> {
        Ok(http::build_404_response())
    }
}
