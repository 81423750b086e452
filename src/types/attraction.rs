use serde::{Deserialize, Serialize};

/// Geographic coordinates, using the places API field names
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point of interest returned by the places lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Provider identifier (Google `place_id`)
    pub id: String,
    pub name: String,
    /// Free text; the places lookup fills it with the vicinity
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Required only when the route is optimized by distance
    #[serde(default)]
    pub location: Option<Location>,
    /// Opaque photo references, passed through untouched
    #[serde(default)]
    pub photos: Vec<serde_json::Value>,
}

impl Attraction {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rating: None,
            location: None,
            photos: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Rating worth showing; zero is what the places lookup reports for "unrated"
    pub fn display_rating(&self) -> Option<f64> {
        self.rating.filter(|rating| *rating > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_attraction() {
        let attraction: Attraction =
            serde_json::from_value(serde_json::json!({"id": "a1", "name": "Museum"})).unwrap();
        assert_eq!(attraction.description, "");
        assert!(attraction.rating.is_none());
        assert!(attraction.location.is_none());
        assert!(attraction.photos.is_empty());
    }

    #[test]
    fn test_zero_rating_is_hidden() {
        let unrated = Attraction::new("a", "Plaza").with_rating(0.0);
        let rated = Attraction::new("b", "Gallery").with_rating(4.2);
        assert_eq!(unrated.display_rating(), None);
        assert_eq!(rated.display_rating(), Some(4.2));
    }
}
