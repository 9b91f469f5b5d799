//! GPS and UTC conversions through the leap second table.
//!
//! The table stores, for each leap second insertion, the UTC date it took
//! effect and the UTC-GPS offset from then on. Finding the right entry for a
//! GPS instant is circular on its face: the applicable offset depends on the
//! UTC time, which is what the conversion produces. The scan below resolves
//! that by trial. For each entry, newest first, it forms the candidate
//! `utc = gps + offset` and accepts the first candidate that does not fall
//! before the entry's own boundary. Offsets differ by whole seconds while
//! boundaries sit years apart, so exactly one candidate is consistent.
//!
//! The UTC to GPS direction needs no trial step; the instant being converted
//! is already UTC and can be compared against the boundaries directly.
//!
//! # Instants outside table coverage
//!
//! Anything before 1981-07-01 carries no accumulated leap seconds and both
//! directions return the input unchanged. GPS and UTC genuinely coincided
//! between the GPS epoch and the first insertion, so this is exact there.
//!
//! # Precision
//!
//! Round trips land within 100 ns of the starting instant; offsets are whole
//! seconds applied through the normalizing addition on
//! [`Timestamp`](crate::Timestamp).

use super::{ToGPS, ToUTC};
use crate::constants::LEAP_SECONDS;
use crate::scales::{GPS, UTC};

impl ToUTC for GPS {
    /// Converts GPS time to UTC, applying the accumulated leap seconds.
    fn to_utc(&self) -> UTC {
        let t = self.to_timestamp();
        for leap in LEAP_SECONDS.iter() {
            let candidate = t.add_seconds(leap.utc_minus_gps);
            if candidate.diff(leap.boundary()) >= 0.0 {
                return UTC::from_timestamp(candidate);
            }
        }
        UTC::from_timestamp(t)
    }
}

impl ToGPS for UTC {
    /// Converts UTC to GPS time, removing the accumulated leap seconds.
    fn to_gps(&self) -> GPS {
        let t = self.to_timestamp();
        for leap in LEAP_SECONDS.iter() {
            if t.diff(leap.boundary()) >= 0.0 {
                return GPS::from_timestamp(t.add_seconds(-leap.utc_minus_gps));
            }
        }
        GPS::from_timestamp(t)
    }
}

/// Identity conversion.
impl ToGPS for GPS {
    fn to_gps(&self) -> GPS {
        *self
    }
}

/// Identity conversion.
impl ToUTC for UTC {
    fn to_utc(&self) -> UTC {
        *self
    }
}
