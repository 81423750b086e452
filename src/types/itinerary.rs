use super::{
    attraction::Attraction,
    clock::ClockTime,
    preferences::{Pace, Transportation},
};
use serde::Serialize;

/// Fixed length of the lunch break
pub const LUNCH_MINUTES: u32 = 60;

/// One line item of a day plan, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Stop {
        time: ClockTime,
        attraction: Attraction,
        duration_minutes: u32,
    },
    Travel {
        minutes: u32,
        /// Name of the next stop
        destination: String,
    },
    Lunch {
        time: ClockTime,
        duration_minutes: u32,
    },
}

impl Entry {
    /// Start time for entries that occupy a slot on the clock
    pub fn start(&self) -> Option<ClockTime> {
        match self {
            Entry::Stop { time, .. } | Entry::Lunch { time, .. } => Some(*time),
            Entry::Travel { .. } => None,
        }
    }

    /// End time for entries that occupy a slot on the clock
    pub fn end(&self) -> Option<ClockTime> {
        match self {
            Entry::Stop {
                time,
                duration_minutes,
                ..
            }
            | Entry::Lunch {
                time,
                duration_minutes,
            } => Some(time.add_minutes(*duration_minutes)),
            Entry::Travel { .. } => None,
        }
    }
}

/// A scheduled day, built before any text is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub start: ClockTime,
    pub capped_end: ClockTime,
    /// `None` when nothing fit into the window
    pub end_of_tour: Option<ClockTime>,
    pub entries: Vec<Entry>,
    pub pace: Pace,
    pub transportation: Transportation,
}

impl Itinerary {
    pub fn stops(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Entry::Stop { .. }))
    }

    pub fn stop_count(&self) -> usize {
        self.stops().count()
    }

    pub fn lunch(&self) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| matches!(entry, Entry::Lunch { .. }))
    }

    /// Travel time that follows the stop at `index` in `entries`, if any
    pub fn travel_after(&self, index: usize) -> Option<u32> {
        match self.entries.get(index + 1) {
            Some(Entry::Travel { minutes, .. }) => Some(*minutes),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
