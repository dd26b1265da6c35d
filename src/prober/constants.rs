/// Probes always go over plain HTTP.
pub const SCHEME: &str = "http";

/// User agent sent with every probe.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Characters that end the authority of a URL when they appear in a host.
pub const HOST_DELIMITERS: [char; 5] = ['/', '?', '#', '@', '\\'];
