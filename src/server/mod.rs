// Server module entry point
// Listener construction, accept loop and per-connection handling

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module is declared as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used entry points
pub use listener::bind_listener;
pub use server_loop::serve;
