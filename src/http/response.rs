//! HTTP response building module
//!
//! Builders for the response shapes this service produces. Each builder
//! falls back to a bare response if construction itself fails, so nothing
//! here can panic on the serving path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK with an empty body
pub fn build_empty_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 OK carrying a static JSON payload
pub fn build_json_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::from_static(body.as_bytes())))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_is_200_with_zero_length() {
        let resp = build_empty_response();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "0");
    }

    #[test]
    fn json_response_sets_content_type_and_length() {
        let resp = build_json_response("{\"ok\": true}");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["content-length"], "12");
    }

    #[test]
    fn error_responses_carry_expected_status() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_500_response().status(), 500);
    }
}
