//! daytrip-rs: nearby attractions, short-range forecasts and day itineraries
//!
//! The heart of the crate is a deterministic day scheduler: given attractions
//! and preferences it orders the stops, sizes each visit by category and pace,
//! places a lunch break and renders a time-boxed plan. A [`Planner`] wraps it
//! with optional text generation and always falls back to the scheduler.
//!
//! # Quick Start
//!
//! ```rust
//! use daytrip_rs::{scheduler, Attraction, ClockTime, Location, Preferences};
//!
//! let attractions = vec![
//!     Attraction::new("m", "Museum").with_location(Location::new(45.66, -111.05)),
//!     Attraction::new("p", "Park").with_location(Location::new(45.67, -111.05)),
//! ];
//! let preferences = Preferences::default().with_window(
//!     ClockTime::parse("9:00 AM").unwrap(),
//!     ClockTime::parse("2:00 PM").unwrap(),
//! );
//!
//! let plan = scheduler::fallback_itinerary(&attractions, &preferences, None);
//! assert!(plan.contains("9:00 AM - MUSEUM"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod scheduler;
pub mod services;
pub mod types;

pub use config::Config;
pub use self::core::{Plan, PlanSource, Planner};
pub use error::{PlannerError, Result};
pub use types::{
    Attraction, ClockTime, Entry, Forecast, Itinerary, Location, Pace, PlanRequest, Preferences,
    Transportation, WeatherDay,
};

#[cfg(feature = "cli")]
pub mod cli;
