use crate::types::{Pace, Transportation};

pub fn pace_tips(pace: Pace) -> &'static [&'static str] {
    match pace {
        Pace::Relaxed => &[
            "Take your time to enjoy each location",
            "Consider extra breaks between attractions",
            "Use the lunch break to rest and recharge",
        ],
        Pace::Moderate => &[
            "Balance sightseeing with rest periods",
            "Stay flexible with timing",
        ],
        Pace::Fast => &[
            "Prioritize must-see attractions",
            "Consider splitting into smaller groups for efficiency",
            "Book tickets ahead to skip queues",
        ],
    }
}

pub fn transport_tips(mode: Transportation) -> &'static [&'static str] {
    match mode {
        Transportation::Walking => &[
            "👟 Wear comfortable walking shoes",
            "🗺️ Download an offline map of the area",
        ],
        Transportation::PublicTransport => &[
            "🎫 Get a day pass if you plan several rides",
            "🕒 Check the last departure times for your return",
        ],
        Transportation::Driving => &[
            "🅿️ Look up parking near each stop in advance",
            "⛽ Allow extra time for traffic around midday",
        ],
    }
}

pub const GENERAL_TIPS: [&str; 4] = [
    "🚰 Carry water and snacks",
    "🕒 Check attraction opening hours",
    "☂️ Bring umbrella/sunscreen as needed",
    "🔋 Carry a portable charger",
];
