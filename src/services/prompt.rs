use crate::types::{Attraction, Forecast, Preferences};

/// One bullet per attraction, e.g. "- Museum: 600 W Kagy Blvd (Rating: 4.5)"
pub fn attraction_lines(attractions: &[Attraction]) -> String {
    attractions
        .iter()
        .map(|attraction| {
            let rating = attraction
                .display_rating()
                .map(|rating| format!(" (Rating: {:.1})", rating))
                .unwrap_or_default();
            if attraction.description.trim().is_empty() {
                format!("- {}{}", attraction.name, rating)
            } else {
                format!(
                    "- {}: {}{}",
                    attraction.name,
                    attraction.description.trim(),
                    rating
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the itinerary prompt sent to the text generator
pub fn generate_itinerary_prompt(
    attractions: &[Attraction],
    preferences: &Preferences,
    weather: Option<&Forecast>,
) -> String {
    let attractions_text = if attractions.is_empty() {
        "- No specific attractions; suggest a walk around the area".to_string()
    } else {
        attraction_lines(attractions)
    };

    let mut prompt = format!(
        "Task: Create a detailed travel itinerary.\n\n\
         Attractions Available:\n{}\n\n\
         Schedule Parameters:\n\
         - Start Time: {}\n\
         - End Time: {}\n\
         - Pace: {}\n\
         - Transportation: {}\n",
        attractions_text,
        preferences.start_time,
        preferences.capped_end(),
        preferences.pace,
        preferences.transportation.label(),
    );

    if let Some(forecast) = weather.filter(|f| !f.forecast.is_empty()) {
        prompt.push_str(&format!(
            "\nWeather Forecast for {}, {}:\n",
            forecast.location, forecast.country
        ));
        for day in &forecast.forecast {
            prompt.push_str(&format!("- {}\n", day.summary()));
        }
    }

    prompt.push_str("\nPlease provide a structured itinerary with exact timings.");
    prompt
}
