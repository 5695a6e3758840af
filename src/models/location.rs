//! Geographic coordinate model

use serde::{Deserialize, Serialize};

/// A resolved point on the map
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Name reported by the geocoder, if any
    pub name: Option<String>,
}

impl GeoCoordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    /// Attach the geocoder's display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
