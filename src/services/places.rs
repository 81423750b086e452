use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::types::{Attraction, Location};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_RADIUS_METERS: u32 = 5000;
const PLACE_TYPE: &str = "tourist_attraction";
const SERVICE: &str = "places";

/// Nearby attraction search
#[async_trait]
pub trait PlacesLookup: Send + Sync + std::fmt::Debug {
    async fn nearby(&self, latitude: f64, longitude: f64, radius_meters: u32)
        -> Result<Vec<Attraction>>;
}

/// Google Places nearby-search client
#[derive(Debug, Clone)]
pub struct PlacesClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Option<Vec<PlaceResult>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    photos: Vec<serde_json::Value>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

impl From<PlaceResult> for Attraction {
    fn from(place: PlaceResult) -> Self {
        Attraction {
            id: place.place_id,
            name: place.name,
            description: place.vicinity.unwrap_or_default(),
            rating: Some(place.rating.unwrap_or(0.0)),
            location: Some(place.geometry.location),
            photos: place.photos,
        }
    }
}

impl PlacesClient {
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
}

#[async_trait]
impl PlacesLookup for PlacesClient {
    async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<Attraction>> {
        let url = format!("{}/nearbysearch/json", self.base_url);
        let location = format!("{},{}", latitude, longitude);
        let radius = radius_meters.to_string();

        debug!(target: "daytrip::places", %location, radius_meters, "nearby search");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", PLACE_TYPE),
                ("key", self.api_key.as_str()),
            ])
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

        let parsed: NearbyResponse = PlannerError::decode(SERVICE, &body)?;
        if let (Some(status), Some(message)) = (&parsed.status, &parsed.error_message) {
            if status == "REQUEST_DENIED" || status == "INVALID_REQUEST" {
                return Err(PlannerError::Api {
                    service: SERVICE,
                    status: 400,
                    message: format!("{status}: {message}"),
                });
            }
        }

        let attractions: Vec<Attraction> = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Attraction::from)
            .collect();
        info!(target: "daytrip::places", count = attractions.len(), "attractions found");
        Ok(attractions)
    }
}
