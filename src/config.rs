//! Configuration management for the `daywise` planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `daywise` planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Text-generation API configuration
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Geocoding API configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Pipeline behaviour
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Text-generation (Gemini) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_generation_model")]
    pub model: String,
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,
    #[serde(default = "default_generation_timeout")]
    pub timeout_seconds: u32,
}

/// Which geocoding backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingProvider {
    /// Google when a key is configured, Open-Meteo otherwise
    #[default]
    Auto,
    Google,
    OpenMeteo,
}

/// Geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default)]
    pub provider: GeocodingProvider,
    /// Google Maps API key
    pub api_key: Option<String>,
    /// Overrides the provider's default endpoint
    pub base_url: Option<String>,
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_seconds: u32,
}

/// Weather (OpenWeatherMap) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Without a key every day is rendered without weather
    pub api_key: Option<String>,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_weather_timeout")]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Run the per-day geocode and weather lookups concurrently
    #[serde(default)]
    pub concurrent_lookups: bool,
}

/// The three service credentials, as resolved from file and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub generation_api_key: Option<String>,
    pub geocoding_api_key: Option<String>,
    pub weather_api_key: Option<String>,
}

// Default value functions
fn default_generation_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_generation_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_generation_timeout() -> u32 {
    60
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_weather_timeout() -> u32 {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_generation_model(),
            base_url: default_generation_base_url(),
            timeout_seconds: default_generation_timeout(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            provider: GeocodingProvider::default(),
            api_key: None,
            base_url: None,
            timeout_seconds: default_geocoding_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
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
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

// Plain API key variables, read when the DAYWISE_ ones are unset
const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";
const GOOGLE_MAPS_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
const OPENWEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";

impl PlannerConfig {
    /// Load configuration from `config_path`, or the default location, then
    /// the environment
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        // A missing .env file is fine
        dotenv::dotenv().ok();

        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // DAYWISE_WEATHER__API_KEY -> weather.api_key
        builder = builder.add_source(
            Environment::with_prefix("DAYWISE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_env_keys(|name| std::env::var(name).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("daywise").join("config.toml"))
    }

    /// Fill API keys that are still unset from the plain `*_API_KEY` variables
    pub fn apply_env_keys<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if self.generation.api_key.is_none() {
            self.generation.api_key = lookup(GEMINI_KEY_VAR);
        }
        if self.geocoding.api_key.is_none() {
            self.geocoding.api_key = lookup(GOOGLE_MAPS_KEY_VAR);
        }
        if self.weather.api_key.is_none() {
            self.weather.api_key = lookup(OPENWEATHER_KEY_VAR);
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.generation.model.is_empty() {
            self.generation.model = default_generation_model();
        }
        if self.generation.base_url.is_empty() {
            self.generation.base_url = default_generation_base_url();
        }
        if self.generation.timeout_seconds == 0 {
            self.generation.timeout_seconds = default_generation_timeout();
        }
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_geocoding_timeout();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            generation_api_key: self.generation.api_key.clone(),
            geocoding_api_key: self.geocoding.api_key.clone(),
            weather_api_key: self.weather.api_key.clone(),
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        let keys = [
            ("Generation", &self.generation.api_key),
            ("Geocoding", &self.geocoding.api_key),
            ("Weather", &self.weather.api_key),
        ];

        for (service, key) in keys {
            if let Some(api_key) = key {
                if api_key.trim().is_empty() {
                    return Err(PlannerError::config(format!(
                        "{service} API key cannot be empty if provided. Either remove it or provide a valid key."
                    ))
                    .into());
                }
            }
        }

        if self.geocoding.provider == GeocodingProvider::Google && self.geocoding.api_key.is_none()
        {
            return Err(PlannerError::config(
                "Geocoding provider 'google' requires geocoding.api_key (or GOOGLE_MAPS_API_KEY)",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let timeouts = [
            ("Generation", self.generation.timeout_seconds),
            ("Geocoding", self.geocoding.timeout_seconds),
            ("Weather", self.weather.timeout_seconds),
        ];
        for (service, timeout) in timeouts {
            if timeout > 300 {
                return Err(PlannerError::config(format!(
                    "{service} API timeout cannot exceed 300 seconds"
                ))
                .into());
            }
        }

        if self.server.port == 0 {
            return Err(PlannerError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("Generation", Some(&self.generation.base_url)),
            ("Geocoding", self.geocoding.base_url.as_ref()),
            ("Weather", Some(&self.weather.base_url)),
        ];
        for (service, url) in urls {
            if let Some(url) = url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(PlannerError::config(format!(
                        "{service} API base URL must be a valid HTTP or HTTPS URL"
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }
}
