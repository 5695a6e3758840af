//! Itinerary text handling
//!
//! Pure functions over model output: building the prompt, splitting the
//! returned text into day blocks and guessing a place name for each day.
//! Nothing in here talks to the network.

pub mod guesser;
pub mod prompt;
pub mod splitter;

pub use guesser::{MAX_LOCATION_CHARS, guess_location};
pub use prompt::build_prompt;
pub use splitter::split_day_blocks;
