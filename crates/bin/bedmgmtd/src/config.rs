//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `bedmgmt.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use uuid::Uuid;

use bedmgmt_adapter_openmrs::OpenmrsConfig;
use bedmgmt_app::services::ward_bed_service::WardFailurePolicy;
use bedmgmt_domain::id::LocationTagId;
use bedmgmt_domain::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// Tag the OpenMRS reference metadata puts on admission locations.
const ADMISSION_LOCATION_TAG: Uuid = Uuid::from_u128(0xb8bb_f83e_645f_451f_8efe_a0db_56f0_9676);

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// OpenMRS backend settings.
    pub backend: BackendConfig,
    /// Bed listing settings.
    pub listing: ListingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// OpenMRS backend configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root of the OpenMRS web application.
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Locations carrying this tag are wards.
    pub ward_tag: LocationTagId,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Bed listing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Page size used when a request does not pick one.
    pub default_page_size: usize,
    /// What to do when the beds of a single ward cannot be fetched.
    pub ward_failure_policy: WardFailurePolicy,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `bedmgmt.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bedmgmt.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("BEDMGMT_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("BEDMGMT_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("BEDMGMT_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("BEDMGMT_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Some(val) = var("BEDMGMT_BACKEND_USERNAME") {
            self.backend.username = Some(val);
        }
        if let Some(val) = var("BEDMGMT_BACKEND_PASSWORD") {
            self.backend.password = Some(val);
        }
        if let Some(val) = var("BEDMGMT_WARD_TAG") {
            self.backend.ward_tag = LocationTagId::parse(&val)
                .map_err(|err| ConfigError::Validation(err.to_string()))?;
        }
        if let Some(val) = var("BEDMGMT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "backend base_url must not be empty".to_string(),
            ));
        }
        if !PAGE_SIZES.contains(&self.listing.default_page_size) {
            return Err(ConfigError::Validation(format!(
                "default_page_size must be one of {PAGE_SIZES:?}"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl BackendConfig {
    /// Connection settings for the OpenMRS client.
    #[must_use]
    pub fn openmrs(&self) -> OpenmrsConfig {
        OpenmrsConfig {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        let openmrs = OpenmrsConfig::default();
        Self {
            base_url: openmrs.base_url,
            username: openmrs.username,
            password: openmrs.password,
            ward_tag: LocationTagId::from_uuid(ADMISSION_LOCATION_TAG),
            timeout_secs: openmrs.timeout_secs,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            ward_failure_policy: WardFailurePolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bedmgmtd=info,bedmgmt=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
