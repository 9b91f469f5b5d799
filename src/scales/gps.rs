//! GPS Time scale.
//!
//! GPS Time is the continuous time scale broadcast by GPS satellites. It
//! began at 1980-01-06 00:00:00 UTC and has never been adjusted since: leap
//! seconds inserted into UTC simply widen the UTC-GPS offset.
//!
//! # Week and Time of Week
//!
//! Receivers report GPS time as an integer week count since the epoch plus
//! seconds into the current week (0 <= TOW < 604800). Both directions of
//! that encoding live here:
//!
//! ```
//! use gps_time::GPS;
//!
//! let gps = GPS::from_week_and_tow(2190, 518418.0);
//! let (week, tow) = gps.to_week_and_tow();
//! assert_eq!((week, tow), (2190, 518418.0));
//! ```
//!
//! A time of week whose magnitude exceeds 1e9 seconds is treated as a
//! malformed reading and replaced with zero rather than rejected; the
//! constructor is total.
//!
//! # Conversions
//!
//! GPS converts to UTC through the leap second table. See
//! [`conversions`](crate::scales::conversions) for the trait.

use crate::calendar::CalendarEpoch;
use crate::constants::{GPS_EPOCH_SECONDS, MAX_TOW_MAGNITUDE, SECONDS_PER_WEEK};
use crate::timestamp::Timestamp;
use crate::TimeResult;
use std::fmt;

/// An instant on the GPS time scale.
///
/// Wraps a [`Timestamp`] to keep GPS instants apart from UTC at the type
/// level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GPS(Timestamp);

impl GPS {
    /// Creates a GPS instant from whole seconds and a fractional part.
    pub fn new(seconds: i64, fraction: f64) -> Self {
        Self(Timestamp::new(seconds, fraction))
    }

    /// Creates a GPS instant from a raw timestamp.
    pub fn from_timestamp(t: Timestamp) -> Self {
        Self(t)
    }

    /// Returns the GPS epoch, 1980-01-06 00:00:00.
    pub fn epoch() -> Self {
        Self(Timestamp::gps_epoch())
    }

    /// Returns the underlying timestamp.
    pub fn to_timestamp(&self) -> Timestamp {
        self.0
    }

    /// Returns a new GPS instant offset by the given seconds.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    /// Returns `self - other` in seconds.
    pub fn diff(&self, other: GPS) -> f64 {
        self.0.diff(other.0)
    }

    /// Builds a GPS instant from a week number and time of week.
    ///
    /// The whole part of `tow` is split off with floor, so a negative
    /// fractional time of week still yields a fraction in `[0, 1)`. A `tow`
    /// outside `[-1e9, 1e9]`, including NaN, is substituted with zero.
    pub fn from_week_and_tow(week: i32, tow: f64) -> Self {
        let tow = if (-MAX_TOW_MAGNITUDE..=MAX_TOW_MAGNITUDE).contains(&tow) {
            tow
        } else {
            0.0
        };
        let whole = tow.floor();
        let seconds = GPS_EPOCH_SECONDS + SECONDS_PER_WEEK * week as i64 + whole as i64;
        Self(Timestamp::new(seconds, tow - whole))
    }

    /// Splits this instant into a week number and time of week.
    ///
    /// The week is the floor of the elapsed weeks since the GPS epoch, so
    /// the returned time of week is non-negative (plus the fractional part)
    /// even for instants before the epoch.
    pub fn to_week_and_tow(&self) -> (i32, f64) {
        let elapsed = self.0.seconds - GPS_EPOCH_SECONDS;
        let week = elapsed.div_euclid(SECONDS_PER_WEEK);
        let tow = (elapsed - week * SECONDS_PER_WEEK) as f64 + self.0.fraction;
        (week as i32, tow)
    }
}

impl fmt::Display for GPS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPS {}", self.0)
    }
}

impl From<Timestamp> for GPS {
    fn from(t: Timestamp) -> Self {
        Self::from_timestamp(t)
    }
}

/// Creates a GPS instant from calendar components.
///
/// The fields are read as a date/time on the GPS scale itself; no leap
/// second correction is applied. For a UTC calendar date, build a
/// [`UTC`](crate::UTC) first and convert.
///
/// # Errors
///
/// Returns [`TimeError::InvalidDate`](crate::TimeError::InvalidDate) under
/// the same conditions as [`Timestamp::from_calendar`].
pub fn gps_from_calendar(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
) -> TimeResult<GPS> {
    let t = Timestamp::from_calendar(CalendarEpoch::new(year, month, day, hour, minute, second))?;
    Ok(GPS::from_timestamp(t))
}
