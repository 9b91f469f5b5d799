//! GPS time arithmetic.
//!
//! This crate converts between the four representations of an instant used in
//! GNSS processing: calendar date/time, continuous epoch seconds, GPS
//! week/time-of-week, and UTC.
//!
//! # Time Scale Overview
//!
//! | Scale | Description | Leap seconds |
//! |-------|-------------|--------------|
//! | GPS | Continuous satellite time, epoch 1980-01-06 00:00:00 | Never applied |
//! | UTC | Civil time | Applied by IERS announcement |
//!
//! GPS time and UTC were aligned when GPS time began. UTC has since been held
//! back by leap seconds, so the UTC-GPS offset grows over time and reached
//! -18 seconds on 2017-01-01.
//!
//! # Representation
//!
//! Every instant is a [`Timestamp`]: whole seconds since 1970-01-01 00:00:00
//! as an `i64`, plus an `f64` fractional part. The split keeps sub-second
//! precision intact over the full supported range, which a single `f64`
//! cannot do.
//!
//! # Usage
//!
//! ```
//! use gps_time::{gps_from_calendar, ToUTC};
//!
//! let gps = gps_from_calendar(2022, 1, 1, 0, 0, 18.0).unwrap();
//! let utc = gps.to_utc();
//!
//! let epoch = utc.to_timestamp().to_calendar();
//! assert_eq!((epoch.year, epoch.month, epoch.day), (2022, 1, 1));
//! assert_eq!((epoch.hour, epoch.minute, epoch.second), (0, 0, 0.0));
//! ```
//!
//! Week/time-of-week handling goes through the [`GPS`] scale type:
//!
//! ```
//! use gps_time::GPS;
//!
//! let gps = GPS::from_week_and_tow(2190, 518418.0);
//! assert_eq!(gps.to_week_and_tow(), (2190, 518418.0));
//! ```
//!
//! # Supported Range
//!
//! Calendar conversions accept years 1970 through 2099 and use the
//! simplified divisible-by-four leap year rule, which is exact in that range.
//! The leap second table covers insertions from 1981-07-01 through
//! 2017-01-01; instants before the oldest entry convert between GPS and UTC
//! unchanged.

pub mod calendar;
pub mod constants;
pub mod scales;
pub mod timestamp;

pub use calendar::CalendarEpoch;
pub use scales::conversions::{ToGPS, ToUTC};
pub use scales::{gps_from_calendar, utc_from_calendar, GPS, UTC};
pub use timestamp::Timestamp;

use thiserror::Error;

/// Result type alias for time conversions.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors produced by calendar conversions.
///
/// Only calendar input can fail. Every other operation in the crate is total:
/// implausible inputs are clamped or passed through unchanged rather than
/// rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Calendar date outside the supported range.
    #[error("invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u8,
        /// Day component (1-31).
        day: u8,
        /// Description of what is out of range.
        message: String,
    },
}

impl TimeError {
    /// Creates an invalid date error.
    pub fn invalid_date(year: i32, month: u8, day: u8, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }
}
