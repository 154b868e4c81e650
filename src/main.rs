// LogTriage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. HTTP server bind and serve

use clap::Parser;
use std::net::SocketAddr;

use logtriage::api;
use logtriage::util;

/// LogTriage - log classification and triage service.
///
/// Serves an HTTP API that classifies pasted build/runtime logs into a
/// source category (python, java, jenkins) and returns likely causes,
/// suggested fixes, and the candidate error lines it found.
#[derive(Parser, Debug)]
#[command(name = "LogTriage", version, about)]
struct Cli {
    /// Socket address to bind the HTTP server to.
    #[arg(
        short = 'b',
        long = "bind",
        default_value = util::constants::DEFAULT_BIND_ADDR
    )]
    bind: SocketAddr,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogTriage starting"
    );

    let app = api::router::build_router();

    let listener = match tokio::net::TcpListener::bind(cli.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %cli.bind, error = %e, "Failed to bind listen address");
            eprintln!("Error: failed to bind {}: {e}", cli.bind);
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %cli.bind, "HTTP server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server terminated with error");
        eprintln!("Error: server terminated: {e}");
        std::process::exit(1);
    }
}
