//! `daywise` - Multi-day AI travel planner
//!
//! This library asks a language model for a day-by-day itinerary, splits the
//! answer into days, guesses a main location per day and attaches map
//! coordinates and current weather to each one.

pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use itinerary::{build_prompt, guess_location, split_day_blocks};
pub use models::{
    BudgetTier, DayBlock, DayResult, GeoCoordinate, ItineraryPlan, ItineraryRequest,
    WeatherReading,
};
pub use pipeline::ItineraryPipeline;
pub use services::{Geocoder, Lookup, TextGenerator, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
