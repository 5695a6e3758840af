//! Prompt sent to the text-generation service

use crate::models::ItineraryRequest;

/// Build the itinerary prompt for `request`. Same request, same prompt.
#[must_use]
pub fn build_prompt(request: &ItineraryRequest) -> String {
    format!(
        "You are an expert travel planner.\n\
         Create a detailed day-by-day itinerary for {days} days.\n\
         Trip Details: {details}\n\
         \n\
         For each day, use the format:\n\
         \n\
         Day 1: <MainCityOrArea>\n\
         - Morning: ...\n\
         - Afternoon: ...\n\
         - Evening: ...\n\
         ...\n",
        days = request.duration_days,
        details = request.trip_details(),
    )
}
