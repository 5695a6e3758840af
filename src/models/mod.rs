//! Data models for the daywise planner
//!
//! This module contains the core domain models organized by concern:
//! - Request: the trip description submitted by the user
//! - Itinerary: day blocks parsed from model output and per-day results
//! - Location: Geographic coordinates
//! - Weather: Current weather readings

pub mod itinerary;
pub mod location;
pub mod request;
pub mod weather;

// Re-export all public types for convenient access
pub use itinerary::{DayBlock, DayResult, ItineraryPlan};
pub use location::GeoCoordinate;
pub use request::{BudgetTier, ItineraryRequest, MAX_DURATION_DAYS, MIN_DURATION_DAYS};
pub use weather::WeatherReading;
