//! Best-effort place name extraction from a day block

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DayBlock;

/// Captures at or above this many characters read as sentences, not places
pub const MAX_LOCATION_CHARS: usize = 60;

// The gap after the separator may span a line break; the capture itself
// never does.
static DAY_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Day\s*\d+[:\-]?\s*([\p{L}\p{M}\d ,()\-]+)")
        .expect("day location pattern is valid")
});

/// Guess the main place for a day, or return `fallback` unchanged.
///
/// Looks for `Day N: <Place>` in the block and accepts the trimmed place when
/// it is shorter than [`MAX_LOCATION_CHARS`] characters. A capture of nothing
/// but spaces comes back as an empty string.
#[must_use]
pub fn guess_location(block: &DayBlock, fallback: &str) -> String {
    DAY_LOCATION
        .captures(&block.text)
        .and_then(|caps| caps.get(1))
        .map(|capture| capture.as_str().trim())
        .filter(|place| place.chars().count() < MAX_LOCATION_CHARS)
        .map_or_else(|| fallback.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::split_day_blocks;
    use rstest::rstest;

    const FALLBACK: &str = "Italy";

    fn guess(text: &str) -> String {
        guess_location(&DayBlock::from_span(text), FALLBACK)
    }

    #[rstest]
    #[case("Day 1: Paris", "Paris")]
    #[case("Day 1:   Paris   \n- Morning: Louvre", "Paris")]
    #[case("Day 2- Florence", "Florence")]
    #[case("Day 3-Siena", "Siena")]
    #[case("Day5 Venice", "Venice")]
    #[case("Day 6: Rome (Vatican City), Italy", "Rome (Vatican City), Italy")]
    #[case("Day 7: Lake Como.", "Lake Como")]
    #[case("Day 8: São Paulo", "São Paulo")]
    #[case("Day 9: Zürich", "Zürich")]
    #[case("Day 10: Kyoto's temples", "Kyoto")]
    #[case("Day 11: Paris**", "Paris")]
    fn test_guesses_place_from_header(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(guess(text), expected);
    }

    #[test]
    fn test_long_sentence_falls_back() {
        let text = "Day 1: Arrival and a relaxed walk through the old town before dinner by the river";
        assert_eq!(guess(text), FALLBACK);
    }

    #[test]
    fn test_length_boundary() {
        let fifty_nine = "A".repeat(59);
        let sixty = "A".repeat(60);
        assert_eq!(guess(&format!("Day 1: {fifty_nine}")), fifty_nine);
        assert_eq!(guess(&format!("Day 1: {sixty}")), FALLBACK);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let place = "é".repeat(40);
        assert_eq!(guess(&format!("Day 1: {place}")), place);
    }

    #[rstest]
    #[case("Wander around and enjoy the food.")]
    #[case("day 1: lowercase marker")]
    #[case("")]
    fn test_no_marker_falls_back(#[case] text: &str) {
        assert_eq!(guess(text), FALLBACK);
    }

    #[rstest]
    #[case("Day 1:\nRome\n- Morning: Forum", "Rome")]
    #[case("Day 1:   \n\n  Rome", "Rome")]
    #[case("Day 1\nRome", "Rome")]
    fn test_place_on_following_line(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(guess(text), expected);
    }

    #[rstest]
    #[case("Day 1:\n- Morning: Colosseum", "- Morning")]
    #[case("Day 2 - Florence", "- Florence")]
    fn test_capture_taken_literally(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(guess(text), expected);
    }

    #[rstest]
    #[case("Day 1: **Paris**")]
    #[case("Day 4 – Pisa")]
    fn test_capture_of_spaces_is_empty(#[case] text: &str) {
        assert_eq!(guess(text), "");
    }

    #[test]
    fn test_guess_stops_at_line_break() {
        assert_eq!(guess("Day 1: Rome\nFlorence"), "Rome");
    }

    #[test]
    fn test_fallback_is_returned_unmodified() {
        let block = DayBlock::from_span("no markers here");
        assert_eq!(guess_location(&block, "  New York  "), "  New York  ");
    }

    #[test]
    fn test_split_then_guess() {
        let text = "Day 1: Rome\n- Morning: visit Colosseum\nDay 2: Florence\n- Morning: Uffizi";
        let guesses: Vec<String> = split_day_blocks(text)
            .iter()
            .map(|block| guess_location(block, FALLBACK))
            .collect();
        assert_eq!(guesses, vec!["Rome", "Florence"]);
    }

    #[test]
    fn test_split_then_guess_places_below_headers() {
        let text = "Day 1:\nRome\n- Morning: Forum\nDay 2:\nFlorence\n- Uffizi";
        let guesses: Vec<String> = split_day_blocks(text)
            .iter()
            .map(|block| guess_location(block, FALLBACK))
            .collect();
        assert_eq!(guesses, vec!["Rome", "Florence"]);
    }
}
