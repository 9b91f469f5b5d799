//! Coordinated Universal Time (UTC) scale.
//!
//! UTC is the civil time standard. It is held within 0.9 seconds of Earth
//! rotation time by leap second insertions, announced by the IERS and
//! applied at the end of June 30 or December 31. GPS time takes no such
//! adjustments, so converting between the two scales means consulting the
//! leap second table.
//!
//! # Usage
//!
//! ```
//! use gps_time::{utc_from_calendar, ToGPS};
//!
//! let utc = utc_from_calendar(2017, 1, 1, 0, 0, 0.0).unwrap();
//! let gps = utc.to_gps();
//!
//! // 18 leap seconds separate the scales from 2017-01-01 on.
//! assert_eq!(gps.to_timestamp().diff(utc.to_timestamp()), 18.0);
//! ```
//!
//! # Note on the seconds field
//!
//! The calendar form cannot express the inserted second 23:59:60 as a
//! distinct field value; instants inside an inserted second fold onto the
//! neighboring ones when converted. Callers needing to label the leap
//! second itself must track it out of band.

use crate::calendar::CalendarEpoch;
use crate::constants::NANOSECONDS_PER_SECOND;
use crate::timestamp::Timestamp;
use crate::TimeResult;
use std::fmt;

/// An instant on the UTC time scale.
///
/// Wraps a [`Timestamp`] to keep UTC instants apart from GPS at the type
/// level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UTC(Timestamp);

impl UTC {
    /// Creates a UTC instant from whole seconds and a fractional part.
    pub fn new(seconds: i64, fraction: f64) -> Self {
        Self(Timestamp::new(seconds, fraction))
    }

    /// Creates a UTC instant from a raw timestamp.
    pub fn from_timestamp(t: Timestamp) -> Self {
        Self(t)
    }

    /// Returns the underlying timestamp.
    pub fn to_timestamp(&self) -> Timestamp {
        self.0
    }

    /// Returns a new UTC instant offset by the given seconds.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    /// Returns `self - other` in seconds.
    pub fn diff(&self, other: UTC) -> f64 {
        self.0.diff(other.0)
    }

    /// Returns the current UTC time from the system clock.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(Timestamp::new(
            duration.as_secs() as i64,
            duration.subsec_nanos() as f64 / NANOSECONDS_PER_SECOND,
        ))
    }
}

impl fmt::Display for UTC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC {}", self.0)
    }
}

impl From<Timestamp> for UTC {
    fn from(t: Timestamp) -> Self {
        Self::from_timestamp(t)
    }
}

/// Creates a UTC instant from calendar components.
///
/// # Errors
///
/// Returns [`TimeError::InvalidDate`](crate::TimeError::InvalidDate) under
/// the same conditions as [`Timestamp::from_calendar`].
pub fn utc_from_calendar(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
) -> TimeResult<UTC> {
    let t = Timestamp::from_calendar(CalendarEpoch::new(year, month, day, hour, minute, second))?;
    Ok(UTC::from_timestamp(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_constructor() {
        let utc = utc_from_calendar(2017, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(utc.to_timestamp(), Timestamp::new(1_483_228_800, 0.0));

        assert!(utc_from_calendar(2100, 1, 1, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_arithmetic_forwards_to_timestamp() {
        let utc = UTC::new(1000, 0.0);
        assert_eq!(utc.add_seconds(-0.5).to_timestamp(), Timestamp::new(999, 0.5));
        assert_eq!(utc.diff(UTC::new(990, 0.25)), 9.75);
    }

    #[test]
    fn test_now_is_after_2020() {
        let now = UTC::now();
        assert!(now.to_timestamp().seconds > 1_577_836_800);
        assert!((0.0..1.0).contains(&now.to_timestamp().fraction));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", UTC::new(2, 0.5));
        assert!(s.starts_with("UTC "));
    }
}
