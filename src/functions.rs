// Standard library
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tracing::{info, warn};

// Project imports
use crate::coordinator::types::RoundCoordinator;
use crate::prober::types::HttpProber;
use crate::report::types::StdoutReporter;
use crate::settings::types::{ConfigManager, Settings};
use crate::targets::types::ServerId;

/// Main application loop that runs health-check rounds.
///
/// This function:
/// - Loads the ordered server list
/// - Builds the shared HTTP client used by every probe
/// - Probes all servers concurrently once per round interval
/// - Reports each round once every probe has finished
/// - Returns after the round in flight when shutdown is signalled
pub async fn run(
    config: Arc<ConfigManager>,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings: &Settings = config.get_settings();
    let interval: Duration = settings.get_round_interval();

    let servers: Vec<ServerId> = config.load_servers()?;
    if servers.is_empty() {
        warn!("No servers configured, rounds will report nothing");
    }
    info!(
        servers = servers.len(),
        endpoint = %settings.probe.endpoint,
        port = %settings.probe.port,
        timeout_secs = settings.probe.timeout,
        "Loaded healthcheck targets"
    );

    let prober = HttpProber::from_settings(&settings.probe)?;
    let reporter = StdoutReporter::new(settings.report.format);
    let coordinator = RoundCoordinator::new(Arc::new(prober), Box::new(reporter));

    coordinator
        .run_forever(&servers, interval, shutdown_rx)
        .await;

    Ok(())
}
