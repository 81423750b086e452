use crate::types::{Attraction, Pace};

/// Minimum visit length by category keyword, scanned in this order. The first
/// keyword found in the name or description wins.
pub const CATEGORY_MINUTES: [(&str, u32); 5] = [
    ("museum", 90),
    ("park", 60),
    ("temple", 45),
    ("restaurant", 60),
    ("shopping", 60),
];

/// Used when no category keyword matches
pub const DEFAULT_MINUTES: u32 = 45;

/// Pace multiplier as a percentage
pub fn pace_percent(pace: Pace) -> u32 {
    match pace {
        Pace::Relaxed => 130,
        Pace::Moderate => 100,
        Pace::Fast => 80,
    }
}

/// Base visit length before pace is applied
pub fn base_minutes(name: &str, description: &str) -> u32 {
    let name = name.to_lowercase();
    let description = description.to_lowercase();
    CATEGORY_MINUTES
        .iter()
        .find(|(keyword, _)| name.contains(keyword) || description.contains(keyword))
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DEFAULT_MINUTES)
}

/// Visit length in whole minutes, truncated after scaling by pace
pub fn visit_minutes(attraction: &Attraction, pace: Pace) -> u32 {
    base_minutes(&attraction.name, &attraction.description) * pace_percent(pace) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, description: &str) -> Attraction {
        Attraction::new("id", name).with_description(description)
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(base_minutes("City Museum", ""), 90);
        assert_eq!(base_minutes("Riverside PARK", ""), 60);
        assert_eq!(base_minutes("Golden Pavilion", "Zen temple"), 45);
        assert_eq!(base_minutes("Old Bridge", "scenic crossing"), DEFAULT_MINUTES);
    }

    #[test]
    fn test_first_keyword_wins() {
        // "park" is declared before "temple"
        assert_eq!(base_minutes("Temple of the Deer Park", ""), 60);
        // "museum" in the description beats "temple" in the name
        assert_eq!(base_minutes("Temple Hall", "museum of relics"), 90);
    }

    #[test]
    fn test_pace_scaling_truncates() {
        let museum = named("Museum", "");
        assert_eq!(visit_minutes(&museum, Pace::Relaxed), 117);
        assert_eq!(visit_minutes(&museum, Pace::Moderate), 90);
        assert_eq!(visit_minutes(&museum, Pace::Fast), 72);

        let bridge = named("Bridge", "");
        assert_eq!(visit_minutes(&bridge, Pace::Relaxed), 58);
        assert_eq!(visit_minutes(&bridge, Pace::Fast), 36);
    }
}
