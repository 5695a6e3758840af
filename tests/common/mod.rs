//! In-memory collaborators shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use daywise::{
    BudgetTier, GeoCoordinate, Geocoder, ItineraryPipeline, ItineraryRequest, Lookup,
    PlannerError, TextGenerator, WeatherProvider, WeatherReading,
};

pub const ROME_FLORENCE: &str =
    "Day 1: Rome\n- Morning: visit Colosseum\nDay 2: Florence\n- Morning: Uffizi";

/// Returns canned text, or a generation failure
pub struct ScriptedGenerator {
    pub response: std::result::Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> daywise::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone().map_err(PlannerError::generation)
    }
}

/// Knows a fixed set of places; records every query
#[derive(Default)]
pub struct MapGeocoder {
    pub places: HashMap<String, GeoCoordinate>,
    pub broken: Vec<String>,
    /// Per-place artificial latency
    pub delays: HashMap<String, Duration>,
    pub queries: Mutex<Vec<String>>,
}

impl MapGeocoder {
    pub fn with_places(places: &[(&str, f64, f64)]) -> Self {
        Self {
            places: places
                .iter()
                .map(|(name, lat, lon)| (name.to_string(), GeoCoordinate::new(*lat, *lon)))
                .collect(),
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MapGeocoder {
    async fn resolve(&self, place: &str) -> Lookup<GeoCoordinate> {
        self.queries.lock().unwrap().push(place.to_string());
        if let Some(delay) = self.delays.get(place) {
            tokio::time::sleep(*delay).await;
        }
        if self.broken.iter().any(|p| p == place) {
            return Lookup::unavailable("geocoder exploded");
        }
        match self.places.get(place) {
            Some(coordinate) => Lookup::Found(coordinate.clone()),
            None => Lookup::NotFound,
        }
    }
}

/// Same reading everywhere, or unavailable when built without a key
pub struct StaticWeather {
    pub reading: Option<WeatherReading>,
    pub calls: Mutex<usize>,
}

impl StaticWeather {
    pub fn sunny() -> Arc<Self> {
        Arc::new(Self {
            reading: Some(WeatherReading {
                temperature: 24.5,
                description: "Clear Sky".to_string(),
                icon_url: Some("https://openweathermap.org/img/wn/01d@2x.png".to_string()),
            }),
            calls: Mutex::new(0),
        })
    }

    pub fn without_key() -> Arc<Self> {
        Arc::new(Self {
            reading: None,
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn current(&self, _coordinate: &GeoCoordinate) -> Lookup<WeatherReading> {
        *self.calls.lock().unwrap() += 1;
        match &self.reading {
            Some(reading) => Lookup::Found(reading.clone()),
            None => Lookup::unavailable("No weather API key configured"),
        }
    }
}

pub fn italy_request(days: u32) -> ItineraryRequest {
    ItineraryRequest::new(
        "Milan",
        "Italy",
        BudgetTier::MidRange,
        days,
        "leisure",
        "food",
    )
    .unwrap()
}

pub fn pipeline(
    generator: Arc<ScriptedGenerator>,
    geocoder: Arc<MapGeocoder>,
    weather: Arc<StaticWeather>,
) -> ItineraryPipeline {
    ItineraryPipeline::new(generator, geocoder, weather)
}
