use super::{duration, geo, route};
use crate::types::{Attraction, ClockTime, Entry, Itinerary, Preferences, LUNCH_MINUTES};
use tracing::{debug, trace};

/// Lunch is only taken when the clock lands in [12:00, 14:00)
const LUNCH_WINDOW_HOURS: std::ops::Range<u32> = 12..14;

/// Without attractions, lunch is offered this long after the start at the earliest
const LUNCH_LEAD_MINUTES: u32 = 30;

/// Lay the day out on the clock.
///
/// Attractions are visited in nearest-neighbor order from the first one. Every
/// entry ends no later than the capped end time: visit lengths are clamped to
/// the remaining minutes, and a travel leg that would use up the rest of the
/// day ends the tour instead of leaving a dangling travel note. Lunch is only
/// taken while it leaves room for the attraction that is due next.
pub fn assemble(attractions: &[Attraction], preferences: &Preferences) -> Itinerary {
    let start = preferences.start_time;
    let capped_end = preferences.capped_end();
    let ordered = route::optimize_route(attractions, preferences.transportation);
    debug!(
        target: "daytrip::scheduler",
        stops = ordered.len(),
        travel_minutes = route::route_minutes(&ordered, preferences.transportation),
        %start,
        end = %capped_end,
        "assembling day"
    );

    let mut clock = start;
    let mut lunch_considered = false;
    let mut entries = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut idx = 0;

    while let Some(attraction) = ordered.get(idx) {
        if clock >= capped_end {
            break;
        }

        if !lunch_considered && LUNCH_WINDOW_HOURS.contains(&clock.hour()) {
            lunch_considered = true;
            // a pending stop needs at least one minute after lunch
            if clock.add_minutes(LUNCH_MINUTES) < capped_end {
                entries.push(Entry::Lunch {
                    time: clock,
                    duration_minutes: LUNCH_MINUTES,
                });
                clock = clock.add_minutes(LUNCH_MINUTES);
            }
            // the current attraction is still unvisited
            continue;
        }

        let planned = duration::visit_minutes(attraction, preferences.pace);
        let visit = planned.min(clock.minutes_until(capped_end));
        trace!(
            target: "daytrip::scheduler",
            attraction = %attraction.name,
            at = %clock,
            planned,
            visit
        );
        entries.push(Entry::Stop {
            time: clock,
            attraction: attraction.clone(),
            duration_minutes: visit,
        });
        clock = clock.add_minutes(visit);
        idx += 1;

        if let Some(next) = ordered.get(idx) {
            let travel = geo::travel_between(
                attraction.location.as_ref(),
                next.location.as_ref(),
                preferences.transportation,
            );
            if clock.add_minutes(travel) >= capped_end {
                break;
            }
            entries.push(Entry::Travel {
                minutes: travel,
                destination: next.name.clone(),
            });
            clock = clock.add_minutes(travel);
        }
    }

    if ordered.is_empty() {
        let lunch_time = start.add_minutes(LUNCH_LEAD_MINUTES).max(ClockTime::NOON);
        if start < capped_end && lunch_time.add_minutes(LUNCH_MINUTES) <= capped_end {
            entries.push(Entry::Lunch {
                time: lunch_time,
                duration_minutes: LUNCH_MINUTES,
            });
        }
    }

    let has_stops = entries.iter().any(|e| matches!(e, Entry::Stop { .. }));

    Itinerary {
        start,
        capped_end,
        end_of_tour: has_stops.then(|| clock.min(capped_end)),
        entries,
        pace: preferences.pace,
        transportation: preferences.transportation,
    }
}
