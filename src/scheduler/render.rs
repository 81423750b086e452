use super::tips;
use crate::types::{ClockTime, Entry, Itinerary, Transportation, WeatherDay};

const RULE: &str = "------------------------";

fn travel_icon(mode: Transportation) -> &'static str {
    match mode {
        Transportation::Walking => "🚶",
        Transportation::PublicTransport => "🚌",
        Transportation::Driving => "🚗",
    }
}

/// Render a scheduled day as plain text.
///
/// Stops are grouped under morning and afternoon headings by start time;
/// missing descriptions and ratings are left out rather than printed empty.
pub fn render(itinerary: &Itinerary, weather: Option<&WeatherDay>) -> String {
    let mut lines: Vec<String> = vec!["📋 Your Customized Itinerary".to_string(), RULE.to_string()];

    if let Some(day) = weather {
        lines.push(format!("🌤️ Forecast: {}", day.summary()));
    }

    let mut in_afternoon: Option<bool> = None;
    for (idx, entry) in itinerary.entries.iter().enumerate() {
        match entry {
            Entry::Stop {
                time,
                attraction,
                duration_minutes,
            } => {
                let afternoon = *time >= ClockTime::NOON;
                if in_afternoon != Some(afternoon) {
                    lines.push(String::new());
                    lines.push(if afternoon {
                        "🌇 Afternoon Activities:".to_string()
                    } else {
                        "🌅 Morning Activities:".to_string()
                    });
                    in_afternoon = Some(afternoon);
                }

                lines.push(String::new());
                lines.push(format!("⏰ {} - {}", time, attraction.name.to_uppercase()));
                if !attraction.description.trim().is_empty() {
                    lines.push(format!("📍 {}", attraction.description.trim()));
                }
                if let Some(rating) = attraction.display_rating() {
                    lines.push(format!("⭐ Rating: {:.1}", rating));
                }
                lines.push(format!("⏱️ Duration: {} minutes", duration_minutes));
                if let Some(Entry::Travel {
                    minutes,
                    destination,
                }) = itinerary.entries.get(idx + 1)
                {
                    lines.push(format!(
                        "{} {} minutes travel to {}",
                        travel_icon(itinerary.transportation),
                        minutes,
                        destination
                    ));
                }
            }
            Entry::Lunch {
                time,
                duration_minutes,
            } => {
                lines.push(String::new());
                lines.push("🍴 Lunch Break:".to_string());
                lines.push(format!(
                    "⏰ {} - Take a refreshing break ({} minutes)",
                    time, duration_minutes
                ));
                // the next stop gets a fresh heading
                in_afternoon = None;
            }
            // rendered together with the stop it follows
            Entry::Travel { .. } => {}
        }
    }

    lines.push(String::new());
    match itinerary.end_of_tour {
        Some(end) => lines.push(format!("🏁 End of tour: {}", end)),
        None => lines.push(format!(
            "ℹ️ No visits scheduled between {} and {}",
            itinerary.start, itinerary.capped_end
        )),
    }

    lines.push(String::new());
    lines.push("💡 Travel Tips:".to_string());
    lines.extend(tips::pace_tips(itinerary.pace).iter().map(|tip| format!("✓ {tip}")));

    lines.push(String::new());
    lines.push(format!(
        "{} Getting Around ({}):",
        travel_icon(itinerary.transportation),
        itinerary.transportation.label()
    ));
    lines.extend(
        tips::transport_tips(itinerary.transportation)
            .iter()
            .map(|tip| format!("✓ {tip}")),
    );

    lines.push(String::new());
    lines.push("🎯 General Tips:".to_string());
    lines.extend(tips::GENERAL_TIPS.iter().map(|tip| format!("✓ {tip}")));

    lines.join("\n")
}
