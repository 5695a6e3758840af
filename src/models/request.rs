//! Trip request submitted by the user

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 14;

/// Spending tier for the trip
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetTier {
    Budget,
    #[default]
    #[serde(rename = "Mid-range")]
    MidRange,
    Luxury,
}

impl Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-range",
            BudgetTier::Luxury => "Luxury",
        };
        f.write_str(label)
    }
}

impl FromStr for BudgetTier {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid-range" | "midrange" | "mid" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            other => Err(PlannerError::validation(format!(
                "Unknown budget tier '{other}'. Must be one of: Budget, Mid-range, Luxury"
            ))),
        }
    }
}

/// Everything the planner needs to ask for an itinerary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub budget: BudgetTier,
    /// Trip length in days
    pub duration_days: u32,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub preferences: String,
}

impl ItineraryRequest {
    /// Build a request and validate it
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        budget: BudgetTier,
        duration_days: u32,
        purpose: impl Into<String>,
        preferences: impl Into<String>,
    ) -> Result<Self> {
        let request = Self {
            origin: origin.into(),
            destination: destination.into(),
            budget,
            duration_days,
            purpose: purpose.into(),
            preferences: preferences.into(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(PlannerError::validation(
                "Please enter both starting location and destination.",
            ));
        }

        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(PlannerError::validation(format!(
                "Trip duration must be between {MIN_DURATION_DAYS} and {MAX_DURATION_DAYS} days, got {}",
                self.duration_days
            )));
        }

        Ok(())
    }

    /// Single-line serialization of the request fields used in the prompt
    #[must_use]
    pub fn trip_details(&self) -> String {
        format!(
            "Starting: {}, Destination: {}, Budget: {}, Duration: {} days, Purpose: {}, Preferences: {}",
            self.origin,
            self.destination,
            self.budget,
            self.duration_days,
            self.purpose,
            self.preferences
        )
    }
}
