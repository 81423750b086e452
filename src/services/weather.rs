use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::types::{Forecast, WeatherDay};

pub const DEFAULT_BASE_URL: &str = "https://dataservice.accuweather.com";
const SERVICE: &str = "weather";

/// Five-day forecast lookup
#[async_trait]
pub trait WeatherLookup: Send + Sync + std::fmt::Debug {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast>;
}

/// AccuWeather client: a geoposition search for the location key, then the
/// daily five-day forecast for that key.
#[derive(Debug, Clone)]
pub struct AccuWeatherClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeopositionResponse {
    key: String,
    localized_name: String,
    country: Named,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Named {
    localized_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DailyResponse {
    daily_forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DailyForecast {
    date: DateTime<FixedOffset>,
    temperature: TemperatureRange,
    day: HalfDay,
    night: HalfDay,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemperatureRange {
    minimum: Reading,
    maximum: Reading,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reading {
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HalfDay {
    icon_phrase: String,
    #[serde(default)]
    precipitation_probability: Option<u8>,
}

impl From<DailyForecast> for WeatherDay {
    fn from(daily: DailyForecast) -> Self {
        WeatherDay {
            date: daily.date.date_naive(),
            min_temp: daily.temperature.minimum.value,
            max_temp: daily.temperature.maximum.value,
            day_condition: daily.day.icon_phrase,
            night_condition: daily.night.icon_phrase,
            precipitation_probability: daily.day.precipitation_probability.unwrap_or(0),
        }
    }
}

impl AccuWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlannerError::Api {
                service: SERVICE,
                status: status.as_u16(),
                message: body,
            });
        }

        PlannerError::decode(SERVICE, &body)
    }
}

#[async_trait]
impl WeatherLookup for AccuWeatherClient {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast> {
        let position = format!("{},{}", latitude, longitude);
        let place: GeopositionResponse = self
            .get_json(
                "/locations/v1/cities/geoposition/search",
                &[("q", position.as_str())],
            )
            .await?;
        debug!(target: "daytrip::weather", key = %place.key, name = %place.localized_name, "resolved location");

        let daily: DailyResponse = self
            .get_json(
                &format!("/forecasts/v1/daily/5day/{}", place.key),
                &[("metric", "true"), ("details", "true")],
            )
            .await?;

        Ok(Forecast {
            location: place.localized_name,
            country: place.country.localized_name,
            forecast: daily
                .daily_forecasts
                .into_iter()
                .map(WeatherDay::from)
                .collect(),
        })
    }
}
