//! OpenWeatherMap current-weather client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Lookup, WeatherProvider, http_client, title_case};
use crate::config::WeatherConfig;
use crate::models::{GeoCoordinate, WeatherReading};
use crate::{PlannerError, Result};

pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// `/weather` response, only the fields the planner shows
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: Option<MainReading>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct MainReading {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: Option<String>,
}

#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@2x.png")
}

impl CurrentWeatherResponse {
    /// `None` when the response carries no `main` block
    #[must_use]
    pub fn into_reading(self) -> Option<WeatherReading> {
        let main = self.main?;
        let condition = self.weather.into_iter().next();
        Some(WeatherReading {
            temperature: main.temp,
            description: condition
                .as_ref()
                .map(|c| title_case(&c.description))
                .unwrap_or_default(),
            icon_url: condition.and_then(|c| c.icon).map(|icon| icon_url(&icon)),
        })
    }
}

impl OpenWeatherClient {
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, api_key: &str, coordinate: &GeoCoordinate) -> String {
        format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url,
            coordinate.latitude,
            coordinate.longitude,
            urlencoding::encode(api_key)
        )
    }

    async fn fetch(&self, api_key: &str, coordinate: &GeoCoordinate) -> Result<Option<WeatherReading>> {
        let response = self.client.get(self.url(api_key, coordinate)).send().await?;
        if !response.status().is_success() {
            return Err(PlannerError::api(format!(
                "OpenWeatherMap HTTP {}",
                response.status()
            )));
        }
        let body: CurrentWeatherResponse = response.json().await?;
        Ok(body.into_reading())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, coordinate: &GeoCoordinate) -> Lookup<WeatherReading> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Lookup::unavailable("No weather API key configured");
        };
        debug!("Fetching current weather at {}", coordinate.format_coordinates());
        self.fetch(api_key, coordinate).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_reading() {
        let response: CurrentWeatherResponse = serde_json::from_str(
            r#"{"coord":{"lon":12.5,"lat":41.9},
                "weather":[{"id":802,"main":"Clouds","description":"scattered clouds","icon":"03d"}],
                "main":{"temp":21.37,"feels_like":21.1,"humidity":60},"name":"Rome","cod":200}"#,
        )
        .unwrap();
        let reading = response.into_reading().unwrap();
        assert_eq!(reading.temperature, 21.37);
        assert_eq!(reading.description, "Scattered Clouds");
        assert_eq!(
            reading.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/03d@2x.png")
        );
    }

    #[test]
    fn test_missing_main_is_not_found() {
        let response: CurrentWeatherResponse =
            serde_json::from_str(r#"{"cod":"400","message":"wrong latitude"}"#).unwrap();
        assert!(response.into_reading().is_none());
    }

    #[test]
    fn test_url_uses_metric_units() {
        let config = WeatherConfig {
            api_key: Some("owm-key".to_string()),
            ..WeatherConfig::default()
        };
        let client = OpenWeatherClient::from_config(&config).unwrap();
        assert_eq!(
            client.url("owm-key", &GeoCoordinate::new(41.9, 12.5)),
            "https://api.openweathermap.org/data/2.5/weather?lat=41.9&lon=12.5&appid=owm-key&units=metric"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable_without_request() {
        let client = OpenWeatherClient::from_config(&WeatherConfig::default()).unwrap();
        let lookup = client.current(&GeoCoordinate::new(41.9, 12.5)).await;
        assert!(matches!(lookup, Lookup::Unavailable { .. }));
    }
}
