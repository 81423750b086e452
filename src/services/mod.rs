//! Collaborators around the scheduler: places, weather, text generation

pub mod chat_client;
pub mod places;
pub mod prompt;
pub mod validation;
pub mod weather;
pub mod weather_cache;

pub use chat_client::{ChatClient, TextGenerator};
pub use places::{PlacesClient, PlacesLookup};
pub use prompt::generate_itinerary_prompt;
pub use validation::accept_generated;
pub use weather::{AccuWeatherClient, WeatherLookup};
pub use weather_cache::CachedWeather;
