//! Request handler module
//!
//! Defines the handler contract, the built-in handlers, and the dispatch
//! entry point invoked for every request the server accepts.

pub mod builtin;

use std::convert::Infallible;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::error::HandlerError;
use crate::http;
use crate::logger;
use crate::routing::Router;

// Re-export the built-ins
pub use builtin::{ApiHandler, NotFoundHandler, RootHandler, API_GREETING};

/// A unit of behavior bound to a path: maps a request to a response.
///
/// Handlers are pure and have no required side effects, which keeps them
/// unit-testable from a [`Parts`] fixture without a live socket. A handler
/// must not rely on being able to fail loudly: whatever it cannot produce
/// is turned into a 500 response at the dispatch boundary.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError>;
}

/// Router preloaded with the two routes this service serves.
pub fn default_router() -> Router {
    let mut router = Router::new();
    router.register("/", Arc::new(RootHandler));
    router.register("/api", Arc::new(ApiHandler));
    router
}

/// Main entry point for HTTP request handling.
///
/// Prints the request, resolves the handler for the exact path and invokes
/// it. The request body is never consumed; both routes ignore it.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&parts, state.config.logging.show_headers);
    }

    let response = dispatch(&state.router, &parts);

    if access_log {
        logger::log_response(response.status(), body_len(&response));
    }

    Ok(response)
}

/// Resolve and invoke the handler, catching failures at the boundary.
///
/// Both an error return and a panic become a 500 response; the connection
/// and the process keep serving.
pub fn dispatch(router: &Router, parts: &Parts) -> Response<Full<Bytes>> {
    let handler = router.resolve(parts.uri.path());
    match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(parts))) {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => {
            logger::log_error(&format!("Handler failed for {}: {err}", parts.uri.path()));
            http::build_500_response()
        }
        Err(_) => {
            logger::log_error(&format!("Handler panicked for {}", parts.uri.path()));
            http::build_500_response()
        }
    }
}

fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::Method;

    struct PanickingHandler;

    impl Handler for PanickingHandler {
        fn handle(&self, _req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError> {
            panic!("boom");
        }
    }

    struct FailingHandler;

    impl Handler for FailingHandler {
        fn handle(&self, _req: &Parts) -> Result<Response<Full<Bytes>>, HandlerError> {
            // Out-of-range status makes the builder fail
            Response::builder()
                .status(1000)
                .body(Full::new(Bytes::new()))
                .map_err(HandlerError::from)
        }
    }

    fn parts(method: Method, path: &str) -> Parts {
        let (parts, ()) = Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn default_router_serves_both_routes() {
        let router = default_router();

        let root = dispatch(&router, &parts(Method::GET, "/"));
        assert_eq!(root.status(), 200);

        let api = dispatch(&router, &parts(Method::GET, "/api"));
        assert_eq!(api.status(), 200);

        let other = dispatch(&router, &parts(Method::GET, "/unknown"));
        assert_eq!(other.status(), 404);
    }

    #[test]
    fn handler_error_becomes_500() {
        let mut router = Router::new();
        router.register("/fail", Arc::new(FailingHandler));

        let resp = dispatch(&router, &parts(Method::GET, "/fail"));
        assert_eq!(resp.status(), 500);
    }

    #[test]
    fn handler_panic_becomes_500() {
        let mut router = Router::new();
        router.register("/boom", Arc::new(PanickingHandler));

        let resp = dispatch(&router, &parts(Method::GET, "/boom"));
        assert_eq!(resp.status(), 500);
    }
}
