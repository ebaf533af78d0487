//! Wall-clock instants and their fractional-seconds encoding.
//!
//! An [`Instant`] splits seconds since the Unix epoch into a whole-second
//! count and a nanosecond remainder. The `f64` encoding used by the Julian
//! and Mars date conversions is lossy below roughly a microsecond.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, Utc};

use crate::error::TimeError;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A moment in time as seconds plus nanoseconds since 1970-01-01T00:00:00 UTC.
///
/// `nanoseconds` is normally in `0..1_000_000_000`. [`seconds_to_instant`]
/// truncates toward zero, so a negative non-integral input yields a negative
/// `nanoseconds`; call [`Instant::normalized`] before relying on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl Instant {
    /// The Unix epoch.
    pub const EPOCH: Instant = Instant {
        seconds: 0,
        nanoseconds: 0,
    };

    pub const fn new(seconds: i64, nanoseconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Build a normalized instant from whole seconds and any nanosecond offset.
    pub fn from_parts(seconds: i64, nanoseconds: i64) -> Self {
        Self::new(seconds, nanoseconds).normalized()
    }

    /// Fold the nanosecond field into `0..1_000_000_000`, carrying into `seconds`.
    pub fn normalized(self) -> Self {
        Self {
            seconds: self
                .seconds
                .saturating_add(self.nanoseconds.div_euclid(NANOS_PER_SECOND)),
            nanoseconds: self.nanoseconds.rem_euclid(NANOS_PER_SECOND),
        }
    }

    /// Seconds since the Unix epoch as `f64`.
    pub fn as_seconds(self) -> f64 {
        instant_to_seconds(self)
    }
}

/// Read the system clock.
///
/// A clock that cannot be read, or that reports a time before the Unix
/// epoch, is an environment fault and is returned as
/// [`TimeError::ClockUnavailable`].
pub fn current_instant() -> Result<Instant, TimeError> {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)?;
    let seconds = i64::try_from(since_epoch.as_secs())
        .map_err(|e| TimeError::ClockUnavailable(e.to_string()))?;
    let now = Instant::new(seconds, i64::from(since_epoch.subsec_nanos()));
    tracing::debug!(seconds = now.seconds, nanoseconds = now.nanoseconds, "read system clock");
    Ok(now)
}

/// `seconds + nanoseconds / 1e9`.
pub fn instant_to_seconds(t: Instant) -> f64 {
    t.seconds as f64 + t.nanoseconds as f64 / NANOS_PER_SECOND as f64
}

/// Split fractional seconds into an [`Instant`].
///
/// The whole part is truncated toward zero and the remainder scaled to
/// nanoseconds, so `-1.25` becomes `{ seconds: -1, nanoseconds: -250_000_000 }`.
///
/// Casts saturate: inputs beyond the `i64` range clamp `seconds` to
/// `i64::MIN`/`i64::MAX`, and NaN maps to [`Instant::EPOCH`].
pub fn seconds_to_instant(seconds: f64) -> Instant {
    let whole = seconds.trunc();
    Instant::new(
        whole as i64,
        ((seconds - whole) * NANOS_PER_SECOND as f64) as i64,
    )
}

fn to_utc(t: Instant) -> Result<(DateTime<Utc>, i64), TimeError> {
    let n = t.normalized();
    let nanos = u32::try_from(n.nanoseconds).map_err(|_| TimeError::OutOfRange(t))?;
    let dt = DateTime::<Utc>::from_timestamp(n.seconds, nanos).ok_or(TimeError::OutOfRange(t))?;
    Ok((dt, n.nanoseconds))
}

/// Render as `YYYY-MM-DD HH:MM:SS.nnnnnnnnn UTC`.
pub fn format_utc(t: Instant) -> Result<String, TimeError> {
    let (dt, nanos) = to_utc(t)?;
    Ok(format!("{}.{nanos:09} UTC", dt.format(TIMESTAMP_FORMAT)))
}

/// Render in the host time zone as `YYYY-MM-DD HH:MM:SS.nnnnnnnnn local`.
pub fn format_local(t: Instant) -> Result<String, TimeError> {
    let (dt, nanos) = to_utc(t)?;
    let local = dt.with_timezone(&Local);
    Ok(format!("{}.{nanos:09} local", local.format(TIMESTAMP_FORMAT)))
}
