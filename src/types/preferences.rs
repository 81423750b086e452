use super::clock::ClockTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How much time to give each visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Fast,
}

impl Pace {
    /// Lenient parse: anything unrecognised is moderate
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Pace::Relaxed,
            "fast" => Pace::Fast,
            _ => Pace::Moderate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Fast => "fast",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Pace::parse).unwrap_or_default())
    }
}

/// How the traveller moves between stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transportation {
    #[default]
    Walking,
    PublicTransport,
    Driving,
}

impl Transportation {
    /// Lenient parse: anything unrecognised is walking
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "public_transport" | "public transport" | "transit" => Transportation::PublicTransport,
            "driving" => Transportation::Driving,
            _ => Transportation::Walking,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Transportation::Walking => "walking",
            Transportation::PublicTransport => "public_transport",
            Transportation::Driving => "driving",
        }
    }

    /// Human label, e.g. "Public Transport"
    pub fn label(self) -> &'static str {
        match self {
            Transportation::Walking => "Walking",
            Transportation::PublicTransport => "Public Transport",
            Transportation::Driving => "Driving",
        }
    }
}

impl fmt::Display for Transportation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Transportation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Transportation::parse).unwrap_or_default())
    }
}

/// Scheduling preferences sent by the client. Every field has a default and
/// invalid values resolve to it instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_start", deserialize_with = "lenient_start")]
    pub start_time: ClockTime,
    #[serde(default = "default_end", deserialize_with = "lenient_end")]
    pub end_time: ClockTime,
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub transportation: Transportation,
}

fn default_start() -> ClockTime {
    ClockTime::from_hm(9, 0).unwrap_or(ClockTime::NOON)
}

fn default_end() -> ClockTime {
    ClockTime::from_hm(18, 0).unwrap_or(ClockTime::LATEST_END)
}

fn lenient_time<'de, D: Deserializer<'de>>(
    deserializer: D,
    fallback: fn() -> ClockTime,
) -> Result<ClockTime, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(ClockTime::parse)
        .unwrap_or_else(fallback))
}

fn lenient_start<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClockTime, D::Error> {
    lenient_time(deserializer, default_start)
}

fn lenient_end<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClockTime, D::Error> {
    lenient_time(deserializer, default_end)
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            start_time: default_start(),
            end_time: default_end(),
            pace: Pace::default(),
            transportation: Transportation::default(),
        }
    }
}

impl Preferences {
    pub fn with_window(mut self, start_time: ClockTime, end_time: ClockTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_transportation(mut self, transportation: Transportation) -> Self {
        self.transportation = transportation;
        self
    }

    /// The stated end time, never later than 10:00 PM
    pub fn capped_end(&self) -> ClockTime {
        self.end_time.min(ClockTime::LATEST_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_object() {
        let prefs: Preferences = serde_json::from_value(json!({})).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.start_time.to_string(), "9:00 AM");
        assert_eq!(prefs.end_time.to_string(), "6:00 PM");
    }

    #[test]
    fn test_invalid_values_resolve_to_defaults() {
        let prefs: Preferences = serde_json::from_value(json!({
            "startTime": "whenever",
            "endTime": null,
            "pace": "sprint",
            "transportation": "teleport"
        }))
        .unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_wire_names() {
        let prefs: Preferences = serde_json::from_value(json!({
            "startTime": "8:00 AM",
            "endTime": "11:30 PM",
            "pace": "fast",
            "transportation": "public_transport"
        }))
        .unwrap();
        assert_eq!(prefs.pace, Pace::Fast);
        assert_eq!(prefs.transportation, Transportation::PublicTransport);
        assert_eq!(prefs.end_time.to_string(), "11:30 PM");
        assert_eq!(prefs.capped_end(), ClockTime::LATEST_END);

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["startTime"], "8:00 AM");
        assert_eq!(value["transportation"], "public_transport");
    }
}
