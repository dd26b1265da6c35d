// 3rd party crates
use thiserror::Error;

/// Why a probe did not produce a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("request build error: {0}")]
    RequestBuild(String),

    #[error("request error: {cause}")]
    Transport {
        kind: TransportErrorKind,
        cause: String,
    },

    #[error("probe task did not complete: {0}")]
    Lost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

impl ProbeError {
    /// Short status marker used in reports instead of a status code.
    pub fn marker(&self) -> &'static str {
        match self {
            ProbeError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            } => "TIMEOUT",
            _ => "FAIL",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ProbeError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }
}
