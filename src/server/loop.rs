// Server loop module
// Accepts connections until interrupted and fans them out to tasks

use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::error::ServerError;
use crate::logger;

/// Serve connections on `listener` until the process is interrupted.
///
/// Accept failures are logged and the loop keeps going; they are almost
/// always transient (per-connection resets, fd pressure). Ctrl-C breaks
/// the loop so the process can exit cleanly with code 0.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
