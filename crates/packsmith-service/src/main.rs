//! `packsmith-server`: serves the pack API.
//!
//! Run with: cargo run -p packsmith-service -- --config packsmith.toml

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use packsmith_config::ServiceConfig;
use packsmith_service::{app, shutdown_signal, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// How long abandoned solves get to notice cancellation at shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(name = "packsmith-server", version, about = "Pack-combination solver service")]
struct Args {
    /// Config file (TOML, or YAML by extension). Defaults apply if absent.
    #[arg(short, long, default_value = "packsmith.toml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    packsmith_console::init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let served = runtime.block_on(serve(args));

    // Dropping the runtime would wait on every blocking solve still running.
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    if let Err(e) = &served {
        warn!(event = "serve_failed", error = %e, "server stopped with error");
    }
    served
}

async fn serve(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = ServiceConfig::load_or_default(&args.config)?;
    config.apply_env_overrides()?;
    config.validate()?;
    info!(
        event = "config_loaded",
        path = %args.config.display(),
        backend = %config.store.backend,
        search_mode = %config.solver.search_mode,
    );

    let state = AppState::from_config(&config)?;

    let addr = config.http.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(event = "listening", address = %addr, "server listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(event = "stopped", "server stopped");
    Ok(())
}
