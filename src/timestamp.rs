//! Split-representation instants: whole seconds plus a fractional part.
//!
//! A [`Timestamp`] stores whole seconds since 1970-01-01 00:00:00 as an
//! `i64` and the sub-second remainder as an `f64`. Keeping the two parts
//! separate preserves sub-nanosecond resolution across the full calendar
//! range, where a single `f64` of epoch seconds would round at the
//! microsecond level.
//!
//! # Usage
//!
//! ```
//! use gps_time::Timestamp;
//!
//! let t = Timestamp::gps_epoch();
//! let later = t.add_seconds(1.5);
//!
//! assert_eq!(later.diff(t), 1.5);
//! assert_eq!(later.fraction, 0.5);
//! ```

use crate::constants::GPS_EPOCH_SECONDS;
use std::fmt;

/// An instant as whole seconds since 1970-01-01 00:00:00 plus a fraction.
///
/// The represented instant equals `seconds + fraction`. Most constructors
/// leave `fraction` in `[0, 1)` and [`Timestamp::add_seconds`] renormalizes
/// into that range, but the fields are public and nothing forces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// Whole seconds since 1970-01-01 00:00:00.
    pub seconds: i64,
    /// Sub-second remainder in seconds.
    pub fraction: f64,
}

impl Timestamp {
    /// Creates a timestamp from whole seconds and a fractional part.
    pub fn new(seconds: i64, fraction: f64) -> Self {
        Self { seconds, fraction }
    }

    /// Returns the reference instant 1970-01-01 00:00:00.
    pub fn unix_epoch() -> Self {
        Self::new(0, 0.0)
    }

    /// Returns the GPS epoch, 1980-01-06 00:00:00.
    pub fn gps_epoch() -> Self {
        Self::new(GPS_EPOCH_SECONDS, 0.0)
    }

    /// Returns the instant as a single `f64` of epoch seconds.
    ///
    /// Loses sub-microsecond precision for present-day instants. Use the
    /// split fields where that matters.
    pub fn to_f64(&self) -> f64 {
        self.seconds as f64 + self.fraction
    }

    /// Returns a new timestamp offset by the given seconds.
    ///
    /// The delta lands on the fractional part first, then whole seconds are
    /// carried over with a floor split. The floor (rather than truncation)
    /// keeps the resulting fraction in `[0, 1)` for negative deltas too,
    /// whenever the input fraction was in that range.
    pub fn add_seconds(&self, delta: f64) -> Self {
        let fraction = self.fraction + delta;
        let whole = fraction.floor();
        Self {
            seconds: self.seconds + whole as i64,
            fraction: fraction - whole,
        }
    }

    /// Returns `self - other` in seconds.
    ///
    /// The whole-second difference is taken in integer arithmetic before
    /// widening, so nearby instants subtract exactly. Precision degrades
    /// once the difference itself exceeds f64 integer resolution; that is a
    /// documented limitation, not corrected here.
    pub fn diff(&self, other: Timestamp) -> f64 {
        (self.seconds - other.seconds) as f64 + self.fraction - other.fraction
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9} s", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Timestamp::unix_epoch(), Timestamp::new(0, 0.0));
        assert_eq!(Timestamp::gps_epoch().seconds, 315_964_800);
        assert_eq!(Timestamp::gps_epoch().fraction, 0.0);
    }

    #[test]
    fn test_add_seconds_carries_whole_part() {
        let t = Timestamp::new(100, 0.25);
        let r = t.add_seconds(2.5);
        assert_eq!(r.seconds, 102);
        assert_eq!(r.fraction, 0.75);
    }

    #[test]
    fn test_add_seconds_negative_delta_floors() {
        let t = Timestamp::new(100, 0.25);
        let r = t.add_seconds(-0.5);
        assert_eq!(r.seconds, 99);
        assert_eq!(r.fraction, 0.75);

        let r = t.add_seconds(-3.0);
        assert_eq!(r.seconds, 97);
        assert_eq!(r.fraction, 0.25);
    }

    #[test]
    fn test_add_seconds_fraction_stays_normalized() {
        let mut t = Timestamp::new(0, 0.0);
        for delta in [0.75, -1.25, 100.5, -0.0625, 86_400.9375] {
            t = t.add_seconds(delta);
            assert!(
                (0.0..1.0).contains(&t.fraction),
                "fraction {} escaped [0,1) after delta {}",
                t.fraction,
                delta
            );
        }
    }

    #[test]
    fn test_diff_additivity() {
        let t = Timestamp::new(315_964_800, 0.125);
        for delta in [0.0, 1.5, -2.25, 604_800.5, -86_400.0] {
            assert_eq!(t.add_seconds(delta).diff(t), delta, "delta {}", delta);
        }
    }

    #[test]
    fn test_diff_antisymmetry() {
        let t1 = Timestamp::new(1_000_000, 0.5);
        let t2 = Timestamp::new(999_997, 0.25);
        assert_eq!(t1.diff(t2), 3.25);
        assert_eq!(t2.diff(t1), -3.25);
    }

    #[test]
    fn test_diff_uses_integer_subtraction_first() {
        // Instants a few seconds apart stay exact even when each absolute
        // value rounds as a lone f64.
        let t1 = Timestamp::new(4_000_000_000_000_000_001, 0.0);
        let t2 = Timestamp::new(4_000_000_000_000_000_000, 0.0);
        assert_eq!(t1.diff(t2), 1.0);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Timestamp::new(3, 0.5));
        assert_eq!(s, "3.500000000 s");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let test_cases = [
            Timestamp::unix_epoch(),
            Timestamp::gps_epoch(),
            Timestamp::new(1_483_228_800, 0.123456789),
            Timestamp::new(-1, 0.999999999),
        ];

        for original in test_cases {
            let json = serde_json::to_string(&original).unwrap();
            let deserialized: Timestamp = serde_json::from_str(&json).unwrap();
            assert_eq!(original.seconds, deserialized.seconds);
            assert_eq!(original.fraction, deserialized.fraction);
        }
    }
}
