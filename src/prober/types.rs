// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, Url};

// Current module imports
use super::errors::ProbeError;

/// Fully resolved destination of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: String,
    pub path: String,
    pub url: Url,
}

/// Result of probing one server once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response arrived; any status code counts, including 4xx and 5xx.
    Success { status: u16, latency: Duration },
    Failure(ProbeError),
}

/// Probes servers over HTTP with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpProber {
    pub client: Client,
    pub endpoint: String,
    pub default_port: String,
    pub timeout: Duration,
}
