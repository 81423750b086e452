use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time, stored as minutes since midnight.
///
/// Unlike `NaiveTime`, adding minutes never wraps into the next day: the value
/// saturates at 11:59 PM, which keeps "has the clock passed the end time"
/// comparisons monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// 12:00 PM
    pub const NOON: ClockTime = ClockTime(12 * 60);
    /// Hard ceiling for any plan: 10:00 PM
    pub const LATEST_END: ClockTime = ClockTime(22 * 60);

    /// Build from hour (0-23) and minute (0-59), `None` when out of range
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    pub fn add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes).min(MINUTES_PER_DAY - 1))
    }

    /// Minutes from `self` until `later`, zero when `later` is not after `self`
    pub fn minutes_until(self, later: ClockTime) -> u32 {
        later.0.saturating_sub(self.0)
    }

    /// Parse "H:MM AM/PM", falling back to 24-hour "HH:MM"
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        NaiveTime::parse_from_str(&trimmed.to_uppercase(), "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .ok()
            .map(Self::from)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.hour() * 60 + time.minute())
    }
}

impl FromStr for ClockTime {
    type Err = crate::PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::PlannerError::Config(format!("Invalid time '{s}', expected H:MM AM/PM"))
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", display_hour, self.minute(), suffix)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time '{raw}'")))
    }
}
