//! A minimal HTTP request-dispatch shell.
//!
//! Listener, exact-match router and handler contract behind two fixed
//! routes: `/` answers 200 with an empty body, `/api` answers 200 with a
//! static JSON greeting. Every other path is a 404. Each accepted request
//! is printed in a human-readable form before the response is written.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
