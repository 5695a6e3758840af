//! Itinerary Pipeline Module
//!
//! Turns a trip request into per-day results: one generation call, then a
//! location guess, a geocode and a weather lookup for every day block. Only a
//! failed generation aborts; lookup misses leave the day's optional fields
//! empty.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::config::PlannerConfig;
use crate::itinerary::{build_prompt, guess_location, split_day_blocks};
use crate::models::{DayBlock, DayResult, ItineraryPlan, ItineraryRequest};
use crate::services::{self, Geocoder, Lookup, TextGenerator, WeatherProvider};
use crate::{PlannerError, Result};

/// Orchestrates the three collaborators for one request at a time
#[derive(Clone)]
pub struct ItineraryPipeline {
    generator: Arc<dyn TextGenerator>,
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    concurrent_lookups: bool,
}

impl ItineraryPipeline {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            generator,
            geocoder,
            weather,
            concurrent_lookups: false,
        }
    }

    /// Build the pipeline with the HTTP collaborators named in `config`
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Ok(Self::new(
            services::create_generator(config)?,
            services::create_geocoder(config)?,
            services::create_weather_provider(config)?,
        )
        .with_concurrent_lookups(config.pipeline.concurrent_lookups))
    }

    /// Run the per-day lookups concurrently; output order is unchanged
    #[must_use]
    pub fn with_concurrent_lookups(mut self, enabled: bool) -> Self {
        self.concurrent_lookups = enabled;
        self
    }

    /// Generate and resolve an itinerary for `request`
    #[instrument(skip_all, fields(destination = %request.destination, days = request.duration_days))]
    pub async fn plan(&self, request: &ItineraryRequest) -> Result<ItineraryPlan> {
        request.validate()?;

        let itinerary_text = self.generate_text(request).await?;
        let blocks = split_day_blocks(&itinerary_text);
        debug!(blocks = blocks.len(), "Split itinerary into day blocks");

        let fallback = request.destination.as_str();
        let days = if self.concurrent_lookups {
            join_all(
                blocks
                    .into_iter()
                    .enumerate()
                    .map(|(i, block)| self.resolve_day(i + 1, block, fallback)),
            )
            .await
        } else {
            let mut days = Vec::with_capacity(blocks.len());
            for (i, block) in blocks.into_iter().enumerate() {
                days.push(self.resolve_day(i + 1, block, fallback).await);
            }
            days
        };

        info!(
            days = days.len(),
            mapped = days.iter().filter(|d| d.coordinate.is_some()).count(),
            "Itinerary planned"
        );

        Ok(ItineraryPlan {
            request: request.clone(),
            itinerary_text,
            days,
            generated_at: Utc::now(),
        })
    }

    async fn generate_text(&self, request: &ItineraryRequest) -> Result<String> {
        let prompt = build_prompt(request);
        let text = self.generator.generate(&prompt).await.map_err(|e| match e {
            PlannerError::Generation { .. } => e,
            other => PlannerError::generation(other.to_string()),
        })?;

        if text.trim().is_empty() {
            return Err(PlannerError::generation("No itinerary generated."));
        }
        Ok(text)
    }

    async fn resolve_day(&self, day_number: usize, block: DayBlock, fallback: &str) -> DayResult {
        let guessed_location = guess_location(&block, fallback);
        debug!(day_number, location = %guessed_location, "Guessed day location");

        let coordinate = match self.geocoder.resolve(&guessed_location).await {
            Lookup::Found(coordinate) => Some(coordinate),
            Lookup::NotFound => {
                warn!(day_number, location = %guessed_location, "Could not find coordinates");
                None
            }
            Lookup::Unavailable { reason } => {
                warn!(day_number, location = %guessed_location, %reason, "Geocoding unavailable");
                None
            }
        };

        let weather = match &coordinate {
            Some(coordinate) => self.weather.current(coordinate).await.found(),
            None => None,
        };
        if coordinate.is_some() && weather.is_none() {
            debug!(day_number, "No current weather for location");
        }

        DayResult {
            day_number,
            header: block.header,
            body: block.body,
            guessed_location,
            coordinate,
            weather,
        }
    }
}
