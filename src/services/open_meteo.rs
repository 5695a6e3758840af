//! Open-Meteo geocoding client (no API key required)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Geocoder, Lookup, http_client};
use crate::config::GeocodingConfig;
use crate::models::GeoCoordinate;
use crate::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for GeoCoordinate {
    fn from(result: GeocodingResult) -> Self {
        let name = match result.country {
            Some(country) => format!("{}, {}", result.name, country),
            None => result.name,
        };
        GeoCoordinate::new(result.latitude, result.longitude).with_name(name)
    }
}

impl GeocodingResponse {
    #[must_use]
    pub fn first_coordinate(self) -> Option<GeoCoordinate> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(GeoCoordinate::from)
    }
}

impl OpenMeteoGeocoder {
    pub fn from_config(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            base_url: config
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn url(&self, place: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(place)
        )
    }

    async fn fetch(&self, place: &str) -> Result<Option<GeoCoordinate>> {
        let response = self.client.get(self.url(place)).send().await?;
        if !response.status().is_success() {
            return Err(PlannerError::api(format!(
                "Open-Meteo geocoding HTTP {}",
                response.status()
            )));
        }
        let body: GeocodingResponse = response.json().await?;
        Ok(body.first_coordinate())
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, place: &str) -> Lookup<GeoCoordinate> {
        debug!("Geocoding location name with Open-Meteo: {}", place);
        self.fetch(place).await.into()
    }
}
