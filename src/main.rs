//! Arithmetic function service.
//!
//! ```text
//!  GET /api/multiply?A=3&B=4  ──▶ ┌─────────────┐    ┌───────────┐    ┌────────────┐
//!                                 │ http server │───▶│ handlers  │───▶│ functions  │
//!  200 text/plain "12"        ◀── │  + layers   │◀───│ (metrics) │◀───│ (pure)     │
//!                                 └─────────────┘    └───────────┘    └────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use arith_functions::config::{load_config, validate_config, ConfigError, ServiceConfig};
use arith_functions::lifecycle::{wait_for_signal, Shutdown};
use arith_functions::observability::{logging, metrics};
use arith_functions::HttpServer;

#[derive(Parser)]
#[command(name = "arith-functions")]
#[command(about = "HTTP multiply/divide functions", version, long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!("arith-functions v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        prefix = %config.routes.prefix,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
