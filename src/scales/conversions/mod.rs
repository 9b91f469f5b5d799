//! Conversions between the GPS and UTC time scales.
//!
//! Each target scale has a trait named after it; implementations live in
//! [`gps_utc`]. The conversions are total functions. An instant that
//! predates the oldest leap second entry has no correction to apply and
//! converts unchanged, which is the defined outcome rather than an error.
//!
//! # Offsets
//!
//! | From | To | Correction |
//! |------|----|------------|
//! | GPS | UTC | UTC = GPS + (UTC-GPS), offset from the leap table, -1 to -18 s |
//! | UTC | GPS | GPS = UTC - (UTC-GPS) |
//!
//! # Usage
//!
//! ```
//! use gps_time::{GPS, ToGPS, ToUTC};
//!
//! let gps = GPS::from_week_and_tow(1930, 12.5);
//! let utc = gps.to_utc();
//! let back = utc.to_gps();
//!
//! assert!(back.diff(gps).abs() < 1e-6);
//! ```

pub mod gps_utc;

use crate::scales::{GPS, UTC};

/// Conversion to GPS time.
pub trait ToGPS {
    /// Returns this instant on the GPS scale.
    fn to_gps(&self) -> GPS;
}

/// Conversion to Coordinated Universal Time.
pub trait ToUTC {
    /// Returns this instant on the UTC scale.
    fn to_utc(&self) -> UTC;
}
