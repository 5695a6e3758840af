//! Splits raw itinerary text into per-day blocks

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DayBlock;

static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day\s*\d+\b").expect("day marker pattern is valid"));

/// Split `text` into one block per `Day N` marker.
///
/// Each block starts at its marker and runs up to the next marker or the end
/// of the text. Anything before the first marker is dropped. Text without any
/// marker becomes a single block; blank text yields no blocks.
#[must_use]
pub fn split_day_blocks(text: &str) -> Vec<DayBlock> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let starts: Vec<usize> = DAY_MARKER.find_iter(text).map(|m| m.start()).collect();

    if starts.is_empty() {
        return vec![DayBlock::from_span(text)];
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            DayBlock::from_span(&text[start..end])
        })
        .collect()
}
