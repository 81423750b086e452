//! Service keys and endpoints, read once from the environment (and `.env`)
//! and handed to the collaborators that need them.

use std::time::Duration;

use crate::error::{PlannerError, Result};
use crate::services::chat_client::{DEFAULT_BASE_URL as DEFAULT_CHAT_URL, DEFAULT_MODEL};
use crate::services::{AccuWeatherClient, CachedWeather, ChatClient, PlacesClient};

pub const PLACES_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";
pub const WEATHER_KEY_VAR: &str = "ACCUWEATHER_API_KEY";
pub const CHAT_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "DAYTRIP_MODEL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub places_api_key: Option<String>,
    pub weather_api_key: Option<String>,
    pub chat_api_key: Option<String>,
    pub chat_base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            places_api_key: None,
            weather_api_key: None,
            chat_api_key: None,
            chat_base_url: DEFAULT_CHAT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            places_api_key: get(PLACES_KEY_VAR),
            weather_api_key: get(WEATHER_KEY_VAR),
            chat_api_key: get(CHAT_KEY_VAR),
            chat_base_url: get("OPENAI_BASE_URL")
                .or_else(|| get("OPENROUTER_BASE_URL"))
                .unwrap_or(defaults.chat_base_url),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            timeout: defaults.timeout,
        }
    }

    pub fn places_client(&self) -> Result<PlacesClient> {
        let key = require(&self.places_api_key, PLACES_KEY_VAR)?;
        Ok(PlacesClient::new(key))
    }

    /// Forecast client behind the hourly coordinate cache
    pub fn weather_client(&self) -> Result<CachedWeather<AccuWeatherClient>> {
        let key = require(&self.weather_api_key, WEATHER_KEY_VAR)?;
        Ok(CachedWeather::new(AccuWeatherClient::new(key)))
    }

    pub fn chat_client(&self) -> Result<ChatClient> {
        let key = require(&self.chat_api_key, CHAT_KEY_VAR)?;
        Ok(ChatClient::new(key)
            .with_base_url(self.chat_base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(self.timeout))
    }
}

fn require<'a>(value: &'a Option<String>, var: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| PlannerError::Config(format!("{var} environment variable is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = Config::from_vars(vars(&[]));
        assert_eq!(config, Config::default());
        let err = config.places_client().unwrap_err();
        assert!(err.to_string().contains(PLACES_KEY_VAR));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_reads_keys_and_base_url_fallback() {
        let config = Config::from_vars(vars(&[
            (PLACES_KEY_VAR, "places-key"),
            (WEATHER_KEY_VAR, "  "),
            (CHAT_KEY_VAR, "chat-key"),
            ("OPENROUTER_BASE_URL", "http://localhost:9000/v1"),
            (MODEL_VAR, "meta/llama"),
        ]));
        assert_eq!(config.places_api_key.as_deref(), Some("places-key"));
        assert_eq!(config.weather_api_key, None);
        assert_eq!(config.chat_base_url, "http://localhost:9000/v1");
        assert_eq!(config.chat_client().unwrap().model(), "meta/llama");
        assert!(config.weather_client().is_err());
    }
}
