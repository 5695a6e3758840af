//! External collaborators
//!
//! The pipeline talks to three services through these traits: text
//! generation, geocoding and current weather. Each HTTP implementation lives
//! in its own submodule; tests substitute in-memory ones.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::{GeocodingProvider, PlannerConfig};
use crate::models::{GeoCoordinate, WeatherReading};
use crate::{PlannerError, Result};

pub mod gemini;
pub mod google_geocoding;
pub mod open_meteo;
pub mod openweather;

pub use gemini::GeminiClient;
pub use google_geocoding::GoogleGeocoder;
pub use open_meteo::OpenMeteoGeocoder;
pub use openweather::OpenWeatherClient;

const USER_AGENT: &str = concat!("daywise/", env!("CARGO_PKG_VERSION"));

/// Outcome of a lookup that is allowed to come back empty
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// The service answered but had nothing for this input
    NotFound,
    /// The service could not be asked or did not answer usefully
    Unavailable { reason: String },
}

impl<T> Lookup<T> {
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Collapse to an `Option`, dropping the reason for a miss
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Unavailable { .. } => None,
        }
    }
}

impl<T> From<Result<Option<T>>> for Lookup<T> {
    fn from(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::NotFound,
            Err(err) => Lookup::unavailable(err.to_string()),
        }
    }
}

/// Produces free text for a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Resolves a free-text place name to its first matching coordinate
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &str) -> Lookup<GeoCoordinate>;
}

/// Current conditions, metric units
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, coordinate: &GeoCoordinate) -> Lookup<WeatherReading>;
}

/// HTTP client shared by the service implementations' constructors
pub(crate) fn http_client(timeout_seconds: u32) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(u64::from(timeout_seconds)))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| PlannerError::config(format!("Failed to create HTTP client: {e}")))
}

pub fn create_generator(config: &PlannerConfig) -> Result<Arc<dyn TextGenerator>> {
    Ok(Arc::new(GeminiClient::from_config(&config.generation)?))
}

/// Pick the geocoding backend named in config
pub fn create_geocoder(config: &PlannerConfig) -> Result<Arc<dyn Geocoder>> {
    let geocoding = &config.geocoding;
    let use_google = match geocoding.provider {
        GeocodingProvider::Google => true,
        GeocodingProvider::OpenMeteo => false,
        GeocodingProvider::Auto => geocoding.api_key.is_some(),
    };

    if use_google {
        debug!("create_geocoder: using Google geocoding");
        Ok(Arc::new(GoogleGeocoder::from_config(geocoding)?))
    } else {
        debug!("create_geocoder: using Open-Meteo geocoding");
        Ok(Arc::new(OpenMeteoGeocoder::from_config(geocoding)?))
    }
}

pub fn create_weather_provider(config: &PlannerConfig) -> Result<Arc<dyn WeatherProvider>> {
    Ok(Arc::new(OpenWeatherClient::from_config(&config.weather)?))
}

/// Uppercase the first letter of every word, lowercase the rest
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_lookup_from_result() {
        let found: Lookup<u8> = Ok(Some(3)).into();
        assert_eq!(found, Lookup::Found(3));

        let missing: Lookup<u8> = Ok(None).into();
        assert_eq!(missing, Lookup::NotFound);

        let failed: Lookup<u8> = Err(PlannerError::api("timeout")).into();
        assert_eq!(failed, Lookup::unavailable("API error: timeout"));
    }

    #[test]
    fn test_lookup_found_collapses_misses() {
        assert_eq!(Lookup::Found("x").found(), Some("x"));
        assert_eq!(Lookup::<&str>::NotFound.found(), None);
        assert_eq!(Lookup::<&str>::unavailable("no key").found(), None);
    }

    #[rstest]
    #[case("light rain", "Light Rain")]
    #[case("OVERCAST CLOUDS", "Overcast Clouds")]
    #[case("clear sky", "Clear Sky")]
    #[case("", "")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_auto_geocoder_selection_without_key() {
        let config = PlannerConfig::default();
        assert!(create_geocoder(&config).is_ok());
    }

    #[test]
    fn test_forced_google_geocoder_without_key_fails() {
        let mut config = PlannerConfig::default();
        config.geocoding.provider = GeocodingProvider::Google;
        assert!(create_geocoder(&config).is_err());
    }
}
