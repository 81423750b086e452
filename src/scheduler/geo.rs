//! Great-circle distance and travel-time estimates between two stops.
//!
//! Distances use the haversine formula on a sphere of radius 6371 km and do
//! not account for the street network; the per-mode speeds are rough urban
//! averages.

use crate::types::{Location, Transportation};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Shortest estimate ever returned, covering parking, boarding and the like
pub const MIN_TRAVEL_MINUTES: u32 = 10;

/// Used between stops when either side has no coordinates
pub const DEFAULT_TRAVEL_MINUTES: u32 = 20;

/// Average speed in km/h per transportation mode
const SPEEDS_KMH: [(Transportation, f64); 3] = [
    (Transportation::Walking, 5.0),
    (Transportation::PublicTransport, 20.0),
    (Transportation::Driving, 30.0),
];

/// Distance in kilometers between two points.
pub fn haversine_km(start: &Location, end: &Location) -> f64 {
    let d_lat = (end.lat - start.lat).to_radians();
    let d_lng = (end.lng - start.lng).to_radians();
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn speed_kmh(mode: Transportation) -> f64 {
    SPEEDS_KMH
        .iter()
        .find(|(candidate, _)| *candidate == mode)
        .map(|(_, speed)| *speed)
        .unwrap_or(SPEEDS_KMH[0].1)
}

/// Whole minutes to get from `start` to `end`, never below [`MIN_TRAVEL_MINUTES`].
pub fn travel_minutes(start: &Location, end: &Location, mode: Transportation) -> u32 {
    let hours = haversine_km(start, end) / speed_kmh(mode);
    let minutes = (hours * 60.0).floor();
    if minutes.is_finite() && minutes < u32::MAX as f64 {
        (minutes as u32).max(MIN_TRAVEL_MINUTES)
    } else {
        MIN_TRAVEL_MINUTES
    }
}

/// Travel estimate between two optional positions
pub fn travel_between(
    start: Option<&Location>,
    end: Option<&Location>,
    mode: Transportation,
) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) => travel_minutes(start, end, mode),
        _ => DEFAULT_TRAVEL_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance_in_kilometers() {
        // White House to the Eisenhower building
        let start = Location::new(38.898556, -77.037852);
        let end = Location::new(38.897147, -77.043934);
        let distance = haversine_km(&start, &end);
        assert!((distance - 0.5496).abs() < 1e-3, "got {distance}");
    }

    #[test]
    fn test_travel_minutes_per_mode() {
        // About 11.1 km due north
        let start = Location::new(0.0, 0.0);
        let end = Location::new(0.1, 0.0);
        assert_eq!(travel_minutes(&start, &end, Transportation::Walking), 133);
        assert_eq!(
            travel_minutes(&start, &end, Transportation::PublicTransport),
            33
        );
        assert_eq!(travel_minutes(&start, &end, Transportation::Driving), 22);
    }

    #[test]
    fn test_short_hops_have_a_floor() {
        let here = Location::new(45.0, 7.0);
        assert_eq!(travel_minutes(&here, &here, Transportation::Driving), 10);
    }

    #[test]
    fn test_missing_coordinates_use_default() {
        let here = Location::new(45.0, 7.0);
        assert_eq!(
            travel_between(Some(&here), None, Transportation::Walking),
            DEFAULT_TRAVEL_MINUTES
        );
    }
}
