use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a short-range forecast, temperatures in °C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub day_condition: String,
    pub night_condition: String,
    /// Percentage, 0-100
    pub precipitation_probability: u8,
}

impl WeatherDay {
    /// One-line description used in prompts and plan headers
    pub fn summary(&self) -> String {
        format!(
            "{}: {}, {:.0}°C to {:.0}°C, {}% chance of precipitation (night: {})",
            self.date.format("%a %b %-d"),
            self.day_condition,
            self.min_temp,
            self.max_temp,
            self.precipitation_probability,
            self.night_condition
        )
    }
}

/// Forecast for a place, in the shape the web client renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: String,
    pub country: String,
    pub forecast: Vec<WeatherDay>,
}

impl Forecast {
    /// The first forecast day, which is the one a day plan is made for
    pub fn today(&self) -> Option<&WeatherDay> {
        self.forecast.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let day = WeatherDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            min_temp: 11.4,
            max_temp: 22.6,
            day_condition: "Mostly sunny".to_string(),
            night_condition: "Clear".to_string(),
            precipitation_probability: 10,
        };
        assert_eq!(
            day.summary(),
            "Sat Jun 1: Mostly sunny, 11°C to 23°C, 10% chance of precipitation (night: Clear)"
        );
    }
}
