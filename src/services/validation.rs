use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PlannerError, Result};

/// Shorter generated text is treated as a failed generation
pub const MIN_ITINERARY_CHARS: usize = 100;

/// A line may appear this many times before the text counts as degenerate
pub const MAX_LINE_REPEATS: usize = 2;

fn time_marker() -> &'static Regex {
    static TIME_MARKER: OnceLock<Regex> = OnceLock::new();
    TIME_MARKER.get_or_init(|| {
        Regex::new(r"(?i)\b(1[0-2]|0?[1-9]):[0-5][0-9]\s*[ap]\.?m\b")
            .expect("time marker pattern is valid")
    })
}

/// Clean up generated text and decide whether it is usable as an itinerary.
///
/// Some models echo the prompt before answering, so it is stripped first.
pub fn accept_generated(prompt: &str, generated: &str) -> Result<String> {
    let text = generated.replace(prompt, "");
    let text = text.trim();

    if text.chars().count() < MIN_ITINERARY_CHARS {
        return Err(PlannerError::Rejected(format!(
            "only {} characters",
            text.chars().count()
        )));
    }

    if !time_marker().is_match(text) {
        return Err(PlannerError::Rejected(
            "no clock times such as 9:00 AM".to_string(),
        ));
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let count = counts.entry(line).or_default();
        *count += 1;
        if *count > MAX_LINE_REPEATS {
            return Err(PlannerError::Rejected(format!("repeated line '{line}'")));
        }
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "9:00 AM - Start at the Museum of the Rockies and explore the dinosaur halls.\n\
                        11:00 AM - Walk to Lindley Park for a short hike.\n\
                        12:30 PM - Lunch downtown.";

    #[test]
    fn test_accepts_reasonable_itinerary() {
        assert_eq!(accept_generated("prompt", GOOD).unwrap(), GOOD);
    }

    #[test]
    fn test_strips_echoed_prompt() {
        let prompt = "Task: Create a detailed travel itinerary.";
        let generated = format!("{prompt}\n\n{GOOD}\n");
        assert_eq!(accept_generated(prompt, &generated).unwrap(), GOOD);
    }

    #[test]
    fn test_rejects_short_text() {
        let err = accept_generated("p", "9:00 AM museum").unwrap_err();
        assert_eq!(err.error_code(), "REJECTED_OUTPUT");
    }

    #[test]
    fn test_rejects_text_without_times() {
        let text = "Visit the museum in the morning and then the park. ".repeat(4);
        assert!(accept_generated("p", &text).is_err());
    }

    #[test]
    fn test_rejects_repetition() {
        let text = format!("{GOOD}\nVisit the Museum of the Rockies\nVisit the Museum of the Rockies\nVisit the Museum of the Rockies");
        assert!(accept_generated("p", &text).is_err());
    }

    #[test]
    fn test_time_marker_forms() {
        assert!(time_marker().is_match("at 9:00 am"));
        assert!(time_marker().is_match("at 10:30PM"));
        assert!(time_marker().is_match("from 07:15 a.m."));
        assert!(!time_marker().is_match("at 14:30"));
    }
}
