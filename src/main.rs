// Standard library
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod coordinator;
mod functions;
mod prober;
mod report;
mod settings;
mod targets;

#[cfg(test)]
mod test_support;

// Project imports
use crate::functions::run;
use crate::settings::types::ConfigManager;

/// Main entry point for the server health checker.
/// This application probes a fixed list of servers over HTTP on a fixed
/// interval and prints one line per server after every round.
///
/// Features:
/// - Concurrent probes with a per-request timeout
/// - Stable report order across rounds
/// - Text or JSON line reports
/// - Layered file and environment configuration
/// - Graceful shutdown on Ctrl+C
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: Arc<ConfigManager> = match ConfigManager::new() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = config.get_log_level();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(format!(
            "{},hyper=error,hyper_util=error,reqwest=error",
            log_level
        ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    info!("⚙️ Settings have been loaded from {:?}.", config.config_path);

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    // Run the main application logic with shutdown signal
    let code = match run(config, shutdown_tx.subscribe()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    };

    info!("Shutdown complete.");
    code
}
