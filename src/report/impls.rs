// Standard library
use std::io::{self, Write};
use std::time::Duration;

// 3rd party crates
use tracing::{info, warn};

// Project imports
use crate::coordinator::types::{RoundEntry, RoundResults};
use crate::prober::errors::ProbeError;
use crate::prober::types::ProbeOutcome;

// Current module imports
use super::traits::Reporter;
use super::types::{JsonLine, ReportFormat, StdoutReporter};

fn millis(latency: Duration) -> f64 {
    latency.as_secs_f64() * 1000.0
}

impl RoundEntry {
    /// Renders this entry as one report line, without a trailing newline.
    pub fn render(&self, round: u64, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => self.render_json(round),
        }
    }

    fn render_text(&self) -> String {
        match &self.outcome {
            ProbeOutcome::Success { status, latency } => format!(
                "{}\tport={}\tstatus={}\tlatency={:.1}ms",
                self.server,
                self.port,
                status,
                millis(*latency)
            ),
            ProbeOutcome::Failure(e) => format!(
                "{}\tport={}\tstatus={}\tlatency=-\terror={}",
                self.server,
                self.port,
                e.marker(),
                e
            ),
        }
    }

    fn render_json(&self, round: u64) -> String {
        let line = JsonLine {
            round,
            server: self.server.as_str(),
            port: &self.port,
            status: self.outcome.status(),
            latency_ms: self.outcome.latency().map(millis),
            error: self.outcome.error().map(ToString::to_string),
        };
        match serde_json::to_string(&line) {
            Ok(json) => json,
            Err(e) => {
                warn!(server = %self.server, "Failed to serialize report line: {}", e);
                String::new()
            }
        }
    }
}

impl RoundResults {
    /// One rendered line per server, in configured order.
    pub fn render(&self, format: ReportFormat) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.render(self.round, format))
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.outcome.is_success())
            .count()
    }

    pub fn timeouts(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.error().is_some_and(ProbeError::is_timeout))
            .count()
    }
}

impl StdoutReporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }
}

impl Reporter for StdoutReporter {
    fn report(&self, results: &RoundResults) {
        info!(
            round = results.round,
            servers = results.entries.len(),
            failures = results.failures(),
            timeouts = results.timeouts(),
            elapsed = ?results.elapsed,
            "Round complete"
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in results.render(self.format) {
            if let Err(e) = writeln!(out, "{}", line) {
                warn!("Failed to write report line: {}", e);
                return;
            }
        }
        if let Err(e) = out.flush() {
            warn!("Failed to flush report: {}", e);
        }
    }
}
