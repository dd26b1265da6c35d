// Project imports
use crate::coordinator::types::RoundResults;

/// Receives every finished round, after its barrier.
pub trait Reporter: Send + Sync {
    fn report(&self, results: &RoundResults);
}
