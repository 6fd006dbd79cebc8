use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use hello_service::config::{AppState, Config};
use hello_service::error::ServerError;
use hello_service::handler;
use hello_service::logger;
use hello_service::server;

/// Minimal HTTP service: logs every request and answers with fixed responses.
#[derive(Debug, Parser)]
#[command(name = "hello-service", version, about)]
struct Cli {
    /// The port to run the server on (default 8080)
    #[arg(long)]
    port: Option<u16>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::log_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ServerError> {
    let cfg = Config::load(cli.port)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), ServerError> {
    let addr = cfg.socket_addr()?;

    // Bind before anything else: a taken or invalid port is fatal here
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg, handler::default_router()));
    server::serve(listener, state).await
}
