//! Weather reading model and display methods

use serde::{Deserialize, Serialize};

/// Current conditions at a day's location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Icon URL for the condition
    pub icon_url: Option<String>,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// One-line summary, e.g. `21.4°C, Scattered Clouds`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}, {}", self.format_temperature(), self.description)
    }
}
