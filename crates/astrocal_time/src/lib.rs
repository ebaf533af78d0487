//! Time conversions between the system clock, Julian Dates and Mars Sol Dates.
//!
//! This crate provides:
//! - `Instant` capture from the system clock and UTC/local formatting
//! - Instant ↔ fractional seconds since the Unix epoch
//! - Julian Date and Modified Julian Date ↔ Instant
//! - Julian Date ↔ Mars Sol Date with a tunable correction term
//!
//! Every conversion is a pure function; only [`current_instant`] touches
//! the environment.

pub mod error;
pub mod instant;
pub mod julian;
pub mod mars;

pub use error::TimeError;
pub use instant::{
    Instant, NANOS_PER_SECOND, current_instant, format_local, format_utc, instant_to_seconds,
    seconds_to_instant,
};
pub use julian::{
    MJD_OFFSET, SECONDS_PER_DAY, UNIX_EPOCH_JD, instant_to_jd, instant_to_mjd, jd_to_instant,
    jd_to_mjd, jd_to_seconds, mjd_to_instant, mjd_to_jd, seconds_to_jd,
};
pub use mars::{
    DEFAULT_MSD_CORRECTION, MARS_SOL_RATIO, MSD_EPOCH_JD, MSD_EPOCH_OFFSET, instant_to_msd,
    jd_to_msd, jd_to_msd_with, msd_to_instant, msd_to_jd, msd_to_jd_with,
};
