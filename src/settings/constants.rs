/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SHC_CONFIG_PATH";

/// Prefix of environment variables layered over the configuration file.
pub const ENV_PREFIX: &str = "SHC";

/// Directory under the user config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "server-healthcheck";

/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ROUND_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_ENDPOINT: &str = "/healthcheck";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Round interval in seconds
[round]
interval = 300

# Healthcheck request configuration
[probe]
endpoint = "/healthcheck"
# Used for servers that do not carry their own port (host:port)
port = "8080"
# Request timeout in seconds
timeout = 5

# Servers to probe, in report order
[targets]
servers = [
    # "host1.api.com:8081",
    # "host2.api.com",
]
# Optional file with one server per line, relative to this file
# servers_file = "servers"

# Report configuration
[report]
# Either "text" or "json"
format = "text"
"#;

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_round_interval() -> u64 {
    DEFAULT_ROUND_INTERVAL_SECS
}

pub fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

pub fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
