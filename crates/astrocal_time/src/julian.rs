//! Julian Date and Modified Julian Date conversions.
//!
//! Unix time = (JD − 2440587.5) × 86400.

use crate::instant::{Instant, instant_to_seconds, seconds_to_instant};

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Offset between JD and MJD (MJD 0 = 1858-11-17T00:00:00).
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds since the Unix epoch → Julian Date.
pub fn seconds_to_jd(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian Date → seconds since the Unix epoch.
pub fn jd_to_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Convert an [`Instant`] to a Julian Date.
pub fn instant_to_jd(t: Instant) -> f64 {
    seconds_to_jd(instant_to_seconds(t))
}

/// Convert a Julian Date to an [`Instant`].
///
/// Goes through `f64` seconds, so for contemporary dates the result is
/// only good to tens of microseconds.
pub fn jd_to_instant(jd: f64) -> Instant {
    seconds_to_instant(jd_to_seconds(jd))
}

/// Julian Date → Modified Julian Date.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

/// Modified Julian Date → Julian Date.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_OFFSET
}

pub fn instant_to_mjd(t: Instant) -> f64 {
    jd_to_mjd(instant_to_jd(t))
}

pub fn mjd_to_instant(mjd: f64) -> Instant {
    jd_to_instant(mjd_to_jd(mjd))
}
