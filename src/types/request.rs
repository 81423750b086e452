use super::{attraction::Attraction, preferences::Preferences};
use serde::{Deserialize, Serialize};

/// Body of an itinerary request as posted by the web client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub preferences: Preferences,
    /// Where to look up the forecast; the client sends the first attraction's position
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl PlanRequest {
    pub fn new(attractions: Vec<Attraction>, preferences: Preferences) -> Self {
        Self {
            attractions,
            preferences,
            latitude: None,
            longitude: None,
        }
    }

    /// Explicit coordinates, else the first attraction that has a location
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => self
                .attractions
                .iter()
                .find_map(|attraction| attraction.location)
                .map(|location| (location.lat, location.lng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Pace};
    use serde_json::json;

    #[test]
    fn test_client_payload() {
        let request: PlanRequest = serde_json::from_value(json!({
            "attractions": [{
                "id": "p1",
                "name": "Museum of the Rockies",
                "description": "600 W Kagy Blvd",
                "rating": 4.7,
                "photos": [{"photo_reference": "abc"}],
                "location": {"lat": 45.66, "lng": -111.05}
            }],
            "preferences": {"startTime": "9:00 AM", "pace": "relaxed"},
            "latitude": 45.66,
            "longitude": -111.05
        }))
        .unwrap();

        assert_eq!(request.attractions.len(), 1);
        assert_eq!(request.preferences.pace, Pace::Relaxed);
        assert_eq!(request.coordinates(), Some((45.66, -111.05)));
    }

    #[test]
    fn test_coordinates_fall_back_to_attractions() {
        let request = PlanRequest::new(
            vec![
                Attraction::new("a", "Square"),
                Attraction::new("b", "Tower").with_location(Location::new(48.85, 2.29)),
            ],
            Preferences::default(),
        );
        assert_eq!(request.coordinates(), Some((48.85, 2.29)));
        assert_eq!(PlanRequest::default().coordinates(), None);
    }
}
