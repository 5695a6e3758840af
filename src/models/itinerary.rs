//! Day blocks parsed from model output and the per-day results built from them

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GeoCoordinate, ItineraryRequest, WeatherReading};

/// One day's span of itinerary text
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DayBlock {
    /// The full span, header line included
    pub text: String,
    /// First line of the span, trimmed
    pub header: String,
    /// Everything after the first line break, trimmed
    pub body: String,
}

impl DayBlock {
    /// Split a span into its header line and body
    #[must_use]
    pub fn from_span(span: &str) -> Self {
        let (header, body) = span.split_once('\n').unwrap_or((span, ""));
        Self {
            text: span.to_string(),
            header: header.trim().to_string(),
            body: body.trim().to_string(),
        }
    }
}

/// Everything shown for one day of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayResult {
    /// 1-based position in the itinerary
    pub day_number: usize,
    pub header: String,
    pub body: String,
    pub guessed_location: String,
    pub coordinate: Option<GeoCoordinate>,
    pub weather: Option<WeatherReading>,
}

impl DayResult {
    #[must_use]
    pub fn tab_label(&self) -> String {
        format!("Day {}", self.day_number)
    }
}

impl Display for DayResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;

        if self.body.is_empty() {
            writeln!(f, "   No detailed activities for this day in the AI output.")?;
        } else {
            for line in self.body.lines() {
                writeln!(f, "   {line}")?;
            }
        }

        match &self.coordinate {
            Some(coordinate) => {
                writeln!(
                    f,
                    "   🗺️ {} ({})",
                    self.guessed_location,
                    coordinate.format_coordinates()
                )?;
                if let Some(weather) = &self.weather {
                    writeln!(
                        f,
                        "   🌤️ Current weather in {}: {}",
                        self.guessed_location,
                        weather.summary()
                    )?;
                }
            }
            None => {
                writeln!(
                    f,
                    "   ⚠️ Could not find coordinates for \"{}\". Weather/map unavailable for this day.",
                    self.guessed_location
                )?;
            }
        }
        Ok(())
    }
}

/// A generated itinerary together with its per-day results
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItineraryPlan {
    pub request: ItineraryRequest,
    /// Model output exactly as received
    pub itinerary_text: String,
    pub days: Vec<DayResult>,
    pub generated_at: DateTime<Utc>,
}
