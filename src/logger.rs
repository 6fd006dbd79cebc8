//! Logger module
//!
//! Plain stdout/stderr logging for the dispatch shell: server lifecycle,
//! per-request dumps and error reporting. There is deliberately no log
//! pipeline here; everything goes straight to the console.

use chrono::Local;
use hyper::http::request::Parts;
use hyper::StatusCode;
use std::net::SocketAddr;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Access log: {}", config.logging.access_log);
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

/// Print a human-readable dump of an incoming request, before dispatch.
pub fn log_request(parts: &Parts, show_headers: bool) {
    println!("{}", format_request(parts, show_headers));
}

/// Render a request the way an operator reads it: request line first, then
/// one indented line per header when enabled.
pub fn format_request(parts: &Parts, show_headers: bool) -> String {
    let mut out = format!(
        "[{}] [Request] {} {} {:?}",
        timestamp(),
        parts.method,
        parts.uri,
        parts.version
    );
    if show_headers {
        for (name, value) in &parts.headers {
            out.push_str(&format!(
                "\n  {}: {}",
                name,
                value.to_str().unwrap_or("<non-ascii>")
            ));
        }
    }
    out
}

pub fn log_response(status: StatusCode, body_bytes: usize) {
    println!("[{}] [Response] {status} ({body_bytes} bytes)", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Interrupt received, stopping server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::{Method, Request};

    fn parts(method: Method, path: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn request_line_contains_method_path_and_version() {
        let parts = parts(Method::POST, "/api", &[]);
        let line = format_request(&parts, false);
        assert!(line.contains("POST"));
        assert!(line.contains("/api"));
        assert!(line.contains("HTTP/1.1"));
    }

    #[test]
    fn headers_are_dumped_when_enabled() {
        let parts = parts(Method::GET, "/", &[("user-agent", "curl/8.0")]);

        let with = format_request(&parts, true);
        assert!(with.contains("user-agent: curl/8.0"));

        let without = format_request(&parts, false);
        assert!(!without.contains("user-agent"));
    }
}
