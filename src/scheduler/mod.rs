//! Deterministic day planner used when no generated itinerary is available.
//!
//! The pipeline is: nearest-neighbor ordering ([`route`]), visit lengths by
//! category and pace ([`duration`]), placement on the clock with a lunch break
//! ([`slots`]) and finally text ([`render`]). Everything here is pure and
//! synchronous; identical inputs always produce identical text.

pub mod duration;
pub mod geo;
pub mod render;
pub mod route;
pub mod slots;
pub mod tips;

use crate::types::{Attraction, Itinerary, Preferences, WeatherDay};

pub use geo::{haversine_km, travel_minutes};
pub use route::optimize_route;
pub use slots::assemble;

/// Build the structured day plan
pub fn build_itinerary(attractions: &[Attraction], preferences: &Preferences) -> Itinerary {
    slots::assemble(attractions, preferences)
}

/// Build and render the day plan. Weather only adds a forecast line.
pub fn fallback_itinerary(
    attractions: &[Attraction],
    preferences: &Preferences,
    weather: Option<&WeatherDay>,
) -> String {
    render::render(&slots::assemble(attractions, preferences), weather)
}
