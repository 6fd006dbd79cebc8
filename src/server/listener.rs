// Listener setup module
// Builds the TCP listener with explicit socket options before handing it to tokio

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Bind a listening socket on `addr`.
///
/// `SO_REUSEADDR` allows rebinding a port left in TIME_WAIT by a previous
/// instance. `SO_REUSEPORT` is intentionally not set: a second instance on
/// a live port must fail with [`ServerError::Bind`].
pub fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    create_listener(addr).map_err(|source| ServerError::Bind { addr, source })
}

fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_ephemeral_port() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn second_bind_on_same_port_fails() {
        let first = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();

        let second = bind_listener(addr);
        assert!(matches!(second, Err(ServerError::Bind { .. })));

        // The failed second bind leaves the first listener untouched
        assert_eq!(first.local_addr().unwrap(), addr);
    }
}
