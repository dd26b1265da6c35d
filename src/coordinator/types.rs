// Standard library
use std::sync::Arc;
use std::time::Duration;

// Project imports
use crate::prober::traits::Prober;
use crate::prober::types::ProbeOutcome;
use crate::report::traits::Reporter;
use crate::targets::types::ServerId;

/// One server's line in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEntry {
    pub server: ServerId,
    pub port: String,
    pub outcome: ProbeOutcome,
}

/// Everything a finished round produced, in configured server order.
#[derive(Debug, Clone)]
pub struct RoundResults {
    /// 1-based round number.
    pub round: u64,
    pub entries: Vec<RoundEntry>,
    /// Wall time from fan-out to barrier.
    pub elapsed: Duration,
}

/// Drives rounds of concurrent probes and reports each one.
pub struct RoundCoordinator {
    pub prober: Arc<dyn Prober>,
    pub reporter: Box<dyn Reporter>,
}
