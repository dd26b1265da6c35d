// 3rd party crates
use serde::{Deserialize, Serialize};

/// Line format of the per-round report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writes reports to standard output.
#[derive(Debug, Clone)]
pub struct StdoutReporter {
    pub format: ReportFormat,
}

/// Shape of one `json` report line.
#[derive(Debug, Serialize)]
pub struct JsonLine<'a> {
    pub round: u64,
    pub server: &'a str,
    pub port: &'a str,
    pub status: Option<u16>,
    pub latency_ms: Option<f64>,
    pub error: Option<String>,
}
