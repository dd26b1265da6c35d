// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::targets::types::ServerId;

// Current module imports
use super::types::ProbeOutcome;

/// Something that can health check a single server.
///
/// Implementations must never panic or return early without an outcome;
/// every failure is folded into [`ProbeOutcome::Failure`].
#[async_trait]
pub trait Prober: Send + Sync {
    /// Port that a probe against `server` is sent to.
    fn port_for(&self, server: &ServerId) -> String;

    /// Probes `server` once.
    async fn probe(&self, server: &ServerId) -> ProbeOutcome;
}
