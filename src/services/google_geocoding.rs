//! Google Maps geocoding client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Geocoder, Lookup, http_client};
use crate::config::GeocodingConfig;
use crate::models::GeoCoordinate;
use crate::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Geocoding response from Google
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// First result, `None` for `ZERO_RESULTS`, an error for any other failure status
    pub fn first_coordinate(self) -> Result<Option<GeoCoordinate>> {
        match self.status.as_str() {
            "OK" => Ok(self.results.into_iter().next().map(|result| {
                let coordinate =
                    GeoCoordinate::new(result.geometry.location.lat, result.geometry.location.lng);
                match result.formatted_address {
                    Some(address) => coordinate.with_name(address),
                    None => coordinate,
                }
            })),
            "ZERO_RESULTS" => Ok(None),
            status => Err(PlannerError::api(format!(
                "Google geocoding returned {status}: {}",
                self.error_message.unwrap_or_default()
            ))),
        }
    }
}

impl GoogleGeocoder {
    pub fn from_config(config: &GeocodingConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| PlannerError::config("Google geocoding requires an API key"))?;

        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            api_key,
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
            "{}/geocode/json?address={}&key={}",
            self.base_url,
            urlencoding::encode(place),
            urlencoding::encode(&self.api_key)
        )
    }

    async fn fetch(&self, place: &str) -> Result<Option<GeoCoordinate>> {
        let response = self.client.get(self.url(place)).send().await?;
        if !response.status().is_success() {
            return Err(PlannerError::api(format!(
                "Google geocoding HTTP {}",
                response.status()
            )));
        }
        let body: GeocodeResponse = response.json().await?;
        body.first_coordinate()
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn resolve(&self, place: &str) -> Lookup<GeoCoordinate> {
        debug!("Geocoding location name with Google: {}", place);
        self.fetch(place).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_result_wins() {
        let response = parse(
            r#"{"status":"OK","results":[
                {"formatted_address":"Rome, Metropolitan City of Rome Capital, Italy",
                 "geometry":{"location":{"lat":41.9027835,"lng":12.4963655},"location_type":"APPROXIMATE"}},
                {"formatted_address":"Rome, GA, USA","geometry":{"location":{"lat":34.257,"lng":-85.1647}}}
            ]}"#,
        );
        let coordinate = response.first_coordinate().unwrap().unwrap();
        assert_eq!(coordinate.latitude, 41.9027835);
        assert_eq!(coordinate.longitude, 12.4963655);
        assert_eq!(
            coordinate.name.as_deref(),
            Some("Rome, Metropolitan City of Rome Capital, Italy")
        );
    }

    #[test]
    fn test_zero_results_is_not_found() {
        let response = parse(r#"{"status":"ZERO_RESULTS","results":[]}"#);
        assert!(response.first_coordinate().unwrap().is_none());
    }

    #[test]
    fn test_denied_request_is_error() {
        let response = parse(
            r#"{"status":"REQUEST_DENIED","results":[],"error_message":"The provided API key is invalid."}"#,
        );
        let err = response.first_coordinate().unwrap_err();
        assert!(err.to_string().contains("REQUEST_DENIED"));
        assert!(err.to_string().contains("API key is invalid"));
    }

    #[test]
    fn test_url_encodes_place() {
        let config = GeocodingConfig {
            api_key: Some("secret".to_string()),
            ..GeocodingConfig::default()
        };
        let geocoder = GoogleGeocoder::from_config(&config).unwrap();
        assert_eq!(
            geocoder.url("Rome (Vatican City), Italy"),
            "https://maps.googleapis.com/maps/api/geocode/json?address=Rome%20%28Vatican%20City%29%2C%20Italy&key=secret"
        );
    }

    #[test]
    fn test_requires_key() {
        assert!(GoogleGeocoder::from_config(&GeocodingConfig::default()).is_err());
    }
}
