//! Server identifiers and server list loading.
//!
//! A server identifier is whatever the operator wrote in the server list:
//! a hostname, `host:port`, an IPv4 literal or an IPv6 literal (bracketed
//! or not). Identifiers are immutable once loaded and are kept in the
//! order they were configured, which is also the order rounds are
//! reported in.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
