// Standard library
use std::time::{Duration, Instant};

// 3rd party crates
use async_trait::async_trait;
use reqwest::{Client, Request};
use tracing::{debug, warn};

// Project imports
use crate::settings::types::Probe;
use crate::targets::types::ServerId;

// Current module imports
use super::constants::USER_AGENT;
use super::errors::ProbeError;
use super::functions::{build_target, discard_body, error_chain, transport_error};
use super::traits::Prober;
use super::types::{HttpProber, ProbeOutcome, ProbeTarget};

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status, .. } => Some(*status),
            ProbeOutcome::Failure(_) => None,
        }
    }

    pub fn latency(&self) -> Option<Duration> {
        match self {
            ProbeOutcome::Success { latency, .. } => Some(*latency),
            ProbeOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            ProbeOutcome::Success { .. } => None,
            ProbeOutcome::Failure(e) => Some(e),
        }
    }
}

impl HttpProber {
    /// Creates a prober whose client enforces `timeout` on every request.
    pub fn new(
        endpoint: impl Into<String>,
        default_port: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            default_port: default_port.into(),
            timeout,
        })
    }

    pub fn from_settings(probe: &Probe) -> Result<Self, reqwest::Error> {
        Self::new(
            probe.endpoint.clone(),
            probe.port.clone(),
            Duration::from_secs(probe.timeout),
        )
    }

    /// Resolves the probe destination for `server`.
    pub fn target(&self, server: &ServerId) -> Result<ProbeTarget, ProbeError> {
        build_target(server, &self.default_port, &self.endpoint)
    }
}

#[async_trait]
impl Prober for HttpProber {
    fn port_for(&self, server: &ServerId) -> String {
        server.port_or(&self.default_port).to_string()
    }

    async fn probe(&self, server: &ServerId) -> ProbeOutcome {
        let target: ProbeTarget = match self.target(server) {
            Ok(target) => target,
            Err(e) => {
                warn!(server = %server, error = %e, "Skipping probe");
                return ProbeOutcome::Failure(e);
            }
        };

        // `build` only fails on a bad URL or header value. The URL is already
        // parsed and no headers are set per request, so this arm should not run.
        let request: Request = match self.client.get(target.url.clone()).build() {
            Ok(request) => request,
            Err(e) => {
                let e = ProbeError::RequestBuild(error_chain(&e));
                warn!(server = %server, error = %e, "Failed to build healthcheck request");
                return ProbeOutcome::Failure(e);
            }
        };

        debug!(
            server = %server,
            host = %target.host,
            port = %target.port,
            path = %target.path,
            "Sending healthcheck request"
        );

        let started: Instant = Instant::now();
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let e = transport_error(&e);
                warn!(
                    server = %server,
                    error = %e,
                    timeout = ?self.timeout,
                    "Healthcheck request failed"
                );
                return ProbeOutcome::Failure(e);
            }
        };
        let latency: Duration = started.elapsed();
        let status: u16 = response.status().as_u16();

        if let Err(e) = discard_body(response).await {
            warn!(
                server = %server,
                error = %error_chain(&e),
                "Failed to discard healthcheck response body"
            );
        }

        debug!(server = %server, status, latency = ?latency, "Healthcheck response received");
        ProbeOutcome::Success { status, latency }
    }
}
