// Standard library
use std::fmt;

// Current module imports
use super::types::{HostPort, ServerId};

impl ServerId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the identifier into a URL-ready host and the embedded port.
    ///
    /// Anything that does not look like `host`, `host:port`, `[v6]` or
    /// `[v6]:port` is returned as the host unchanged so URL parsing can
    /// reject it later.
    pub fn host_port(&self) -> HostPort<'_> {
        let raw: &str = self.0.as_str();

        if raw.starts_with('[') {
            if let Some(end) = raw.find(']') {
                let (host, rest) = raw.split_at(end + 1);
                if rest.is_empty() {
                    return HostPort {
                        host: host.to_string(),
                        port: None,
                    };
                }
                if let Some(port) = rest.strip_prefix(':') {
                    return HostPort {
                        host: host.to_string(),
                        port: Some(port),
                    };
                }
            }
            return HostPort {
                host: raw.to_string(),
                port: None,
            };
        }

        match raw.matches(':').count() {
            0 => HostPort {
                host: raw.to_string(),
                port: None,
            },
            1 => {
                // exactly one colon, so the split always succeeds.
                let (host, port) = raw.split_once(':').unwrap_or((raw, ""));
                HostPort {
                    host: host.to_string(),
                    port: Some(port),
                }
            }
            // bare IPv6 literal.
            _ => HostPort {
                host: format!("[{}]", raw),
                port: None,
            },
        }
    }

    /// The port a probe against this server uses.
    pub fn port_or<'a>(&'a self, default_port: &'a str) -> &'a str {
        self.host_port().port.unwrap_or(default_port)
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
