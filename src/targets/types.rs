/// A configured server, exactly as it appears in the server list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerId(pub(super) String);

/// Host part of a server identifier and its embedded port, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Host as it goes into a URL authority (IPv6 literals are bracketed).
    pub host: String,
    pub port: Option<&'a str>,
}
