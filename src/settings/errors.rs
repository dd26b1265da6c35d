// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Round interval must be greater than 0, got {0}")]
    InvalidRoundInterval(u64),
    #[error("Probe timeout must be greater than 0, got {0}")]
    InvalidProbeTimeout(u64),
    #[error("Probe endpoint must be a path starting with '/' without '?', '#' or spaces, got '{0}'")]
    InvalidEndpoint(String),
    #[error("Probe port must be a number between 1 and 65535, got '{0}'")]
    InvalidPort(String),
}
