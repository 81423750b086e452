pub mod attraction;
pub mod clock;
pub mod itinerary;
pub mod preferences;
pub mod request;
pub mod weather;

pub use attraction::{Attraction, Location};
pub use clock::ClockTime;
pub use itinerary::{Entry, Itinerary, LUNCH_MINUTES};
pub use preferences::{Pace, Preferences, Transportation};
pub use request::PlanRequest;
pub use weather::{Forecast, WeatherDay};
