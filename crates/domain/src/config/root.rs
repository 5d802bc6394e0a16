use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::leases::LeasesConfig;
use super::logging::LoggingConfig;
use super::neighbors::{NeighborFormat, NeighborsConfig};
use super::refresh::RefreshConfig;
use super::server::ServerConfig;

/// Main configuration structure for Ferrous LAN
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// DHCP lease database location
    #[serde(default)]
    pub leases: LeasesConfig,

    /// Neighbor diagnostic command
    #[serde(default)]
    pub neighbors: NeighborsConfig,

    /// Snapshot refresh schedule
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lan.toml in current directory
    /// 3. /etc/ferrous-lan/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.lease_path {
            self.leases.path = path;
        }
        if let Some(format) = overrides.neighbor_format {
            self.neighbors.format = format;
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.refresh.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.leases.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Lease file path cannot be empty".to_string(),
            ));
        }

        if self.leases.read_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lease read timeout must be at least 1 ms".to_string(),
            ));
        }

        if self.neighbors.program().trim().is_empty() {
            return Err(ConfigError::Validation(
                "Neighbor command cannot be empty".to_string(),
            ));
        }

        if self.neighbors.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Neighbor command timeout must be at least 1 ms".to_string(),
            ));
        }

        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Refresh interval must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-lan.toml").exists() {
            Some("ferrous-lan.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-lan/config.toml").exists() {
            Some("/etc/ferrous-lan/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub lease_path: Option<String>,
    pub neighbor_format: Option<NeighborFormat>,
    pub refresh_interval_secs: Option<u64>,
    pub log_level: Option<String>,
}
