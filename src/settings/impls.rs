// Standard library
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{error, info};

// Project imports
use crate::targets::errors::TargetsError;
use crate::targets::functions::load_servers;
use crate::targets::types::ServerId;

// Current module imports
use super::constants::{
    default_endpoint, default_log_level, default_port, default_round_interval, default_timeout,
    CONFIG_DIR_NAME, CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX,
};
use super::errors::ValidationError;
use super::types::{ConfigManager, Log, Probe, Round, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self {
            interval: default_round_interval(),
        }
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            port: default_port(),
            timeout: default_timeout(),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_round_interval(&self) -> Duration {
        Duration::from_secs(self.round.interval)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        // Validate round interval
        if self.round.interval == 0 {
            return Err(ValidationError::InvalidRoundInterval(self.round.interval));
        }

        // Validate probe configuration
        if self.probe.timeout == 0 {
            return Err(ValidationError::InvalidProbeTimeout(self.probe.timeout));
        }

        let endpoint: &str = &self.probe.endpoint;
        if !endpoint.starts_with('/')
            || endpoint.contains(['?', '#'])
            || endpoint.chars().any(char::is_whitespace)
        {
            return Err(ValidationError::InvalidEndpoint(self.probe.endpoint.clone()));
        }

        // The port stays a string; it only has to look like one.
        let port_ok = !self.probe.port.is_empty()
            && self.probe.port.bytes().all(|b| b.is_ascii_digit())
            && matches!(self.probe.port.parse::<u16>(), Ok(p) if p > 0);
        if !port_ok {
            return Err(ValidationError::InvalidPort(self.probe.port.clone()));
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;
        Self::from_path(config_path)
    }

    /// Loads and validates the configuration at `config_path`.
    pub fn from_path(config_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME).join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Provides a reference to the loaded settings.
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }

    /// Loads the ordered server list, resolving `servers_file` next to the config file.
    pub fn load_servers(&self) -> Result<Vec<ServerId>, TargetsError> {
        let base_dir: &Path = self.config_path.parent().unwrap_or_else(|| Path::new("."));
        load_servers(&self.settings.targets, base_dir)
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::ReportFormat;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::ensure_config_file_exists(&path).expect("create default config");
        let manager = ConfigManager::from_path(path).expect("load default config");
        let settings = manager.get_settings();

        assert_eq!(manager.get_log_level(), "info");
        assert_eq!(settings.get_round_interval(), Duration::from_secs(300));
        assert_eq!(settings.probe.endpoint, "/healthcheck");
        assert_eq!(settings.probe.port, "8080");
        assert_eq!(settings.probe.timeout, 5);
        assert_eq!(settings.report.format, ReportFormat::Text);
        assert!(manager.load_servers().expect("servers").is_empty());
    }

    #[test]
    fn test_existing_config_is_not_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(dir.path(), "[round]\ninterval = 42\n");

        ConfigManager::ensure_config_file_exists(&path).expect("config exists");
        let manager = ConfigManager::from_path(path).expect("load config");
        assert_eq!(manager.settings.round.interval, 42);
    }

    #[test]
    fn test_full_config_with_servers_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("servers"), "b.example.com\n").expect("write servers");
        let path = write_config(
            dir.path(),
            r#"
[log]
level = "DEBUG"

[round]
interval = 60

[probe]
endpoint = "/status"
port = "9090"
timeout = 2

[targets]
servers = ["a.example.com:8080"]
servers_file = "servers"

[report]
format = "json"
"#,
        );

        let manager = ConfigManager::from_path(path).expect("load config");
        let settings = manager.get_settings();
        assert_eq!(manager.get_log_level(), "debug");
        assert_eq!(settings.probe.endpoint, "/status");
        assert_eq!(settings.probe.port, "9090");
        assert_eq!(settings.report.format, ReportFormat::Json);

        let servers: Vec<String> = manager
            .load_servers()
            .expect("servers")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(servers, vec!["a.example.com:8080", "b.example.com"]);
    }

    #[test]
    fn test_unknown_report_format_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(dir.path(), "[report]\nformat = \"xml\"\n");
        assert!(ConfigManager::from_path(path).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.log.level = "verbose".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
        settings.log = Log::default();

        settings.round.interval = 0;
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidRoundInterval(0))
        ));
        settings.round = Round::default();

        settings.probe.timeout = 0;
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidProbeTimeout(0))
        ));
        settings.probe = Probe::default();

        for endpoint in ["healthcheck", "/x?y", "/x#z", "/health check"] {
            settings.probe.endpoint = endpoint.to_string();
            assert!(
                matches!(settings.validate(), Err(ValidationError::InvalidEndpoint(_))),
                "endpoint {endpoint:?} should be rejected"
            );
        }
        settings.probe = Probe::default();

        for port in ["", "http", "0", "65536", "+80", "80 "] {
            settings.probe.port = port.to_string();
            assert!(
                matches!(settings.validate(), Err(ValidationError::InvalidPort(_))),
                "port {port:?} should be rejected"
            );
        }
    }
}
