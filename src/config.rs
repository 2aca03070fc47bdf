//! Configuration management for `AgriSphere`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AgriSphereError;
use crate::models::ObservationPeriod;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AgriSphere` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgriSphereConfig {
    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Climate data (NASA POWER) configuration
    #[serde(default)]
    pub environment: EnvironmentConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Which geocoding service resolves free-text queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocoderKind {
    #[default]
    Nominatim,
    OpenMeteo,
}

/// Geocoding API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default)]
    pub provider: GeocoderKind,
    /// Base URL override; empty selects the provider's public endpoint
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Nominatim's usage policy requires an identifying user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// NASA POWER configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_power_base_url")]
    pub base_url: String,
    /// POWER user community, determines units and defaults
    #[serde(default = "default_power_community")]
    pub community: String,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("AgriSphere/{}", crate::VERSION)
}

fn default_power_base_url() -> String {
    "https://power.larc.nasa.gov/api".to_string()
}

fn default_power_community() -> String {
    "AG".to_string()
}

fn default_start_date() -> NaiveDate {
    ObservationPeriod::default().start
}

fn default_end_date() -> NaiveDate {
    ObservationPeriod::default().end
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            provider: GeocoderKind::default(),
            base_url: String::new(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            base_url: default_power_base_url(),
            community: default_power_community(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl GeocodingConfig {
    /// Base URL in effect for the configured provider
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        if !self.base_url.is_empty() {
            return &self.base_url;
        }
        match self.provider {
            GeocoderKind::Nominatim => "https://nominatim.openstreetmap.org",
            GeocoderKind::OpenMeteo => "https://geocoding-api.open-meteo.com/v1",
        }
    }
}

impl EnvironmentConfig {
    #[must_use]
    pub fn period(&self) -> ObservationPeriod {
        ObservationPeriod::new(self.start_date, self.end_date)
    }
}

impl AgriSphereConfig {
    /// Load configuration from `config_path`, or the default location, plus
    /// environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // AGRISPHERE__LOGGING__LEVEL=debug style overrides
        builder = builder.add_source(
            Environment::with_prefix("AGRISPHERE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AgriSphereConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agrisphere").join("config.toml"))
    }

    /// Apply default values to fields left empty or zero
    pub fn apply_defaults(&mut self) {
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_timeout();
        }
        if self.geocoding.user_agent.is_empty() {
            self.geocoding.user_agent = default_user_agent();
        }
        if self.environment.base_url.is_empty() {
            self.environment.base_url = default_power_base_url();
        }
        if self.environment.community.is_empty() {
            self.environment.community = default_power_community();
        }
        if self.environment.timeout_seconds == 0 {
            self.environment.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_period()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geocoding.timeout_seconds > 300 {
            return Err(
                AgriSphereError::config("Geocoding timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.environment.timeout_seconds > 300 {
            return Err(
                AgriSphereError::config("Climate data timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.server.port == 0 {
            return Err(AgriSphereError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AgriSphereError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AgriSphereError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (label, url) in [
            ("Geocoding", self.geocoding.effective_base_url()),
            ("Climate data", self.environment.base_url.as_str()),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AgriSphereError::config(format!(
                    "{label} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }

    fn validate_period(&self) -> Result<()> {
        if !self.environment.period().is_ordered() {
            return Err(AgriSphereError::config(format!(
                "Climate data start date {} is after end date {}",
                self.environment.start_date, self.environment.end_date
            ))
            .into());
        }
        Ok(())
    }
}
