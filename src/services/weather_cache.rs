use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use super::weather::WeatherLookup;
use crate::error::Result;
use crate::types::Forecast;

pub const DEFAULT_CAPACITY: usize = 100;

const SECONDS_PER_HOUR: i64 = 3600;

/// Coordinates rounded to two decimals (about 1 km) plus the hour of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    lat_centi: i64,
    lng_centi: i64,
    hour: i64,
}

impl CacheKey {
    pub fn new(latitude: f64, longitude: f64, at: DateTime<Utc>) -> Self {
        Self {
            lat_centi: (latitude * 100.0).round() as i64,
            lng_centi: (longitude * 100.0).round() as i64,
            hour: at.timestamp().div_euclid(SECONDS_PER_HOUR),
        }
    }
}

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<CacheKey, Forecast>,
    order: VecDeque<CacheKey>,
}

/// Size-bounded forecast cache in front of another [`WeatherLookup`].
///
/// Keys include the hour, so an entry stops being hit once the hour rolls
/// over; stale keys age out through first-in-first-out eviction. Failed
/// lookups are not stored.
#[derive(Debug)]
pub struct CachedWeather<W> {
    inner: W,
    capacity: usize,
    entries: Mutex<Entries>,
}

impl<W: WeatherLookup> CachedWeather<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: W, capacity: usize) -> Self {
        Self {
            inner,
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.values.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Forecast for the position as of `now`
    pub async fn forecast_at(
        &self,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<Forecast> {
        let key = CacheKey::new(latitude, longitude, now);

        if let Some(hit) = self.entries.lock().await.values.get(&key) {
            debug!(target: "daytrip::weather", ?key, "cache hit");
            return Ok(hit.clone());
        }

        // fetched without holding the lock; concurrent misses may both fetch
        let forecast = self.inner.forecast(latitude, longitude).await?;

        let mut entries = self.entries.lock().await;
        if !entries.values.contains_key(&key) {
            while entries.order.len() >= self.capacity {
                if let Some(oldest) = entries.order.pop_front() {
                    entries.values.remove(&oldest);
                }
            }
            entries.order.push_back(key);
        }
        entries.values.insert(key, forecast.clone());
        Ok(forecast)
    }
}

#[async_trait]
impl<W: WeatherLookup> WeatherLookup for CachedWeather<W> {
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast> {
        self.forecast_at(latitude, longitude, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingLookup {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl WeatherLookup for CountingLookup {
        async fn forecast(&self, latitude: f64, _longitude: f64) -> Result<Forecast> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PlannerError::Timeout("weather".to_string()));
            }
            Ok(Forecast {
                location: format!("lat {latitude}"),
                country: "Nowhere".to_string(),
                forecast: Vec::new(),
            })
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_key_rounding_and_hour_truncation() {
        assert_eq!(
            CacheKey::new(45.6612, -111.0441, at(10, 5)),
            CacheKey::new(45.6649, -111.0449, at(10, 59))
        );
        assert_ne!(
            CacheKey::new(45.66, -111.04, at(10, 59)),
            CacheKey::new(45.66, -111.04, at(11, 0))
        );
        assert_ne!(
            CacheKey::new(45.66, -111.04, at(10, 0)),
            CacheKey::new(45.67, -111.04, at(10, 0))
        );
    }

    #[tokio::test]
    async fn test_hits_within_the_hour() {
        let cache = CachedWeather::new(CountingLookup::default());
        cache.forecast_at(45.661, -111.04, at(9, 1)).await.unwrap();
        cache.forecast_at(45.659, -111.04, at(9, 58)).await.unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);

        cache.forecast_at(45.66, -111.04, at(10, 0)).await.unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let cache = CachedWeather::with_capacity(CountingLookup::default(), 2);
        for lat in [1.0, 2.0, 3.0] {
            cache.forecast_at(lat, 0.0, at(12, 0)).await.unwrap();
        }
        assert_eq!(cache.len().await, 2);

        // 1.0 was evicted, 3.0 is still cached
        cache.forecast_at(3.0, 0.0, at(12, 30)).await.unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 3);
        cache.forecast_at(1.0, 0.0, at(12, 30)).await.unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache = CachedWeather::new(CountingLookup {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        assert!(cache.forecast_at(1.0, 1.0, at(8, 0)).await.is_err());
        assert!(cache.forecast_at(1.0, 1.0, at(8, 0)).await.is_err());
        assert!(cache.is_empty().await);
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }
}
