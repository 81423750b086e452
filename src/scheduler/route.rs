use super::geo;
use crate::types::{Attraction, Transportation};

/// Reorder attractions with a nearest-neighbor tour.
///
/// The first attraction stays first; each following stop is the closest
/// unvisited attraction by estimated travel time from the previous one, with
/// ties going to the earlier input position. When any attraction lacks
/// coordinates there is nothing to measure and the input order is kept.
pub fn optimize_route(attractions: &[Attraction], mode: Transportation) -> Vec<Attraction> {
    if attractions.len() < 2 || attractions.iter().any(|a| a.location.is_none()) {
        return attractions.to_vec();
    }

    let mut remaining: Vec<&Attraction> = attractions.iter().collect();
    let mut route = Vec::with_capacity(attractions.len());
    let mut current = remaining.remove(0);
    route.push(current.clone());

    while !remaining.is_empty() {
        let next_idx = remaining
            .iter()
            .enumerate()
            .min_by_key(|(_, candidate)| {
                geo::travel_between(
                    current.location.as_ref(),
                    candidate.location.as_ref(),
                    mode,
                )
            })
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        current = remaining.remove(next_idx);
        route.push(current.clone());
    }

    route
}

/// Total travel minutes along the given order
pub fn route_minutes(route: &[Attraction], mode: Transportation) -> u32 {
    route
        .windows(2)
        .map(|pair| geo::travel_between(pair[0].location.as_ref(), pair[1].location.as_ref(), mode))
        .sum()
}
