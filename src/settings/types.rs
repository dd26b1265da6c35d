// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::report::types::ReportFormat;

// Current module imports
use super::constants::{
    default_endpoint, default_log_level, default_port, default_round_interval, default_timeout,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Round {
    /// Seconds between round starts.
    #[serde(default = "default_round_interval")]
    pub interval: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Probe {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Port for servers without an embedded one. Kept as a string.
    #[serde(default = "default_port")]
    pub port: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Targets {
    #[serde(default)]
    pub servers: Vec<String>,
    #[serde(default)]
    pub servers_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Report {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub round: Round,
    #[serde(default)]
    pub probe: Probe,
    #[serde(default)]
    pub targets: Targets,
    #[serde(default)]
    pub report: Report,
}

/// Settings that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
