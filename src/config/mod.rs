// Configuration module entry point
// Loads the layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration with layered sources.
    ///
    /// Precedence, lowest to highest: built-in defaults, an optional
    /// `config.toml` in the working directory, `SERVER_*` environment
    /// variables, and finally the `--port` command-line override.
    pub fn load(port_override: Option<u16>) -> Result<Self, ServerError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?;

        if let Some(port) = port_override {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ServerError> {
        if self.server.port == 0 {
            return Err(ServerError::InvalidPort {
                port: self.server.port,
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddr { addr, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let cfg = Config::load(None).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn cli_port_overrides_default() {
        let cfg = Config::load(Some(9091)).unwrap();
        assert_eq!(cfg.server.port, 9091);
    }

    #[test]
    fn port_zero_is_rejected_before_binding() {
        let err = Config::load(Some(0)).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort { port: 0 }));
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let cfg = Config::load(Some(8123)).unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8123);
        assert!(addr.ip().is_unspecified());
    }
}
