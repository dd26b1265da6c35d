// Standard library
use std::sync::Arc;
use std::time::{Duration, Instant};

// 3rd party crates
use futures::future::join_all;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

// Project imports
use crate::prober::errors::ProbeError;
use crate::prober::traits::Prober;
use crate::prober::types::ProbeOutcome;
use crate::report::traits::Reporter;
use crate::targets::types::ServerId;

// Current module imports
use super::types::{RoundCoordinator, RoundEntry, RoundResults};

/// `tokio::time::interval` panics on a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

impl RoundCoordinator {
    pub fn new(prober: Arc<dyn Prober>, reporter: Box<dyn Reporter>) -> Self {
        Self { prober, reporter }
    }

    /// Runs a round immediately, then one per `interval`, until shutdown.
    ///
    /// A round that overruns the interval is followed by the next one right
    /// after its report; rounds never overlap. Shutdown is observed between
    /// rounds, so an in-flight round is always reported.
    pub async fn run_forever(
        &self,
        servers: &[ServerId],
        interval: Duration,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            servers = servers.len(),
            "🕰️ Probing servers every {:?}",
            interval
        );

        let mut round: u64 = 0;
        loop {
            tokio::select! {
                biased;

                // Handle shutdown signal
                Ok(_) = shutdown_rx.recv() => {
                    info!("Received shutdown signal, stopping health checks");
                    break;
                }

                _ = ticker.tick() => {
                    round += 1;
                    let results = self.run_round(round, servers).await;
                    self.reporter.report(&results);
                }
            }
        }
    }

    /// Probes every server concurrently and waits for all of them.
    ///
    /// The returned entries line up one-to-one with `servers`.
    pub async fn run_round(&self, round: u64, servers: &[ServerId]) -> RoundResults {
        let expected: usize = servers.len();
        let started: Instant = Instant::now();
        debug!(round, servers = expected, "Starting round");

        let (tx, mut rx) = mpsc::channel::<(usize, ProbeOutcome)>(expected.max(1));

        // Spawn every probe before awaiting any of them.
        let mut handles = Vec::with_capacity(expected);
        for (index, server) in servers.iter().enumerate() {
            let prober: Arc<dyn Prober> = Arc::clone(&self.prober);
            let server: ServerId = server.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let outcome = prober.probe(&server).await;
                // the receiver lives until every sender is gone.
                let _ = tx.send((index, outcome)).await;
            }));
        }
        drop(tx);

        // Barrier: the channel closes once every task has sent or died.
        let mut slots: Vec<Option<ProbeOutcome>> = vec![None; expected];
        while let Some((index, outcome)) = rx.recv().await {
            if slots[index].is_some() {
                warn!(round, server = %servers[index], "Ignoring duplicate probe outcome");
                continue;
            }
            slots[index] = Some(outcome);
        }

        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            if let Err(e) = joined {
                error!(round, server = %servers[index], "Probe task failed: {}", e);
                if slots[index].is_none() {
                    slots[index] = Some(ProbeOutcome::Failure(ProbeError::Lost(e.to_string())));
                }
            }
        }

        let entries: Vec<RoundEntry> = servers
            .iter()
            .zip(slots)
            .map(|(server, slot)| RoundEntry {
                server: server.clone(),
                port: self.prober.port_for(server),
                outcome: slot.unwrap_or_else(|| {
                    ProbeOutcome::Failure(ProbeError::Lost("no outcome delivered".to_string()))
                }),
            })
            .collect();

        RoundResults {
            round,
            entries,
            elapsed: started.elapsed(),
        }
    }
}
