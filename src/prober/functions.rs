// Standard library
use std::error::Error;

// 3rd party crates
use reqwest::{Response, Url};

// Project imports
use crate::targets::types::ServerId;

// Current module imports
use super::constants::{HOST_DELIMITERS, SCHEME};
use super::errors::{ProbeError, TransportErrorKind};
use super::types::ProbeTarget;

/// Builds and validates the URL for probing `server`.
pub fn build_target(
    server: &ServerId,
    default_port: &str,
    endpoint: &str,
) -> Result<ProbeTarget, ProbeError> {
    let invalid = |reason: String| ProbeError::InvalidTarget {
        target: server.to_string(),
        reason,
    };

    let host_port = server.host_port();
    let port: &str = host_port.port.unwrap_or(default_port);

    // `Url` accepts an empty port after the colon, so reject it here.
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("port '{}' is not a number", port)));
    }

    // These would move the host into the userinfo, path, query or fragment.
    if let Some(c) = host_port
        .host
        .chars()
        .find(|c| HOST_DELIMITERS.contains(c) || c.is_whitespace())
    {
        return Err(invalid(format!("host contains '{}'", c.escape_default())));
    }

    let raw: String = format!("{}://{}:{}{}", SCHEME, host_port.host, port, endpoint);
    let url: Url = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    // The parsed URL must point exactly where the report says it does.
    if url.port_or_known_default() != port.parse::<u16>().ok() {
        return Err(invalid(format!("resolves to a port other than {}", port)));
    }
    if url.path() != endpoint || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(format!("resolves to '{}' instead of path '{}'", url, endpoint)));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("carries userinfo".to_string()));
    }

    Ok(ProbeTarget {
        host: host_port.host,
        port: port.to_string(),
        path: endpoint.to_string(),
        url,
    })
}

/// Maps a failed request to a transport failure, keeping its cause chain.
pub fn transport_error(error: &reqwest::Error) -> ProbeError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };

    ProbeError::Transport {
        kind,
        cause: error_chain(error),
    }
}

/// Renders an error and all of its sources as `outer: inner: root`.
pub fn error_chain(error: &dyn Error) -> String {
    let mut message: String = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

/// Reads the rest of the body so the connection can go back to the pool.
pub async fn discard_body(mut response: Response) -> Result<u64, reqwest::Error> {
    let mut discarded: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        discarded += chunk.len() as u64;
    }
    Ok(discarded)
}
