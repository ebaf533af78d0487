//! Sexagesimal (degree/minute/second) angles and bulk degree ↔ radian scaling.
//!
//! A negative angle carries its sign on the first non-zero component only:
//! −0.5° decomposes to 0° −30′ 0″, since an integer degree field cannot
//! hold a negative zero. The reverse conversion treats the angle as
//! negative if any component is negative.

use std::fmt::{Display, Formatter};

use crate::error::FrameError;

/// Degrees, arc-minutes and arc-seconds with the sign on the first non-zero field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub degrees: i32,
    /// Arc-minutes, nominally 0..59.
    pub minutes: i32,
    /// Arc-seconds, nominally [0, 60).
    pub seconds: f64,
}

impl Sexagesimal {
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// True if any component carries a minus sign.
    pub fn is_negative(&self) -> bool {
        self.degrees < 0 || self.minutes < 0 || self.seconds < 0.0
    }

    /// Lenient conversion to decimal degrees; see [`sexagesimal_to_decimal`].
    pub fn to_decimal(&self) -> DecimalAngle {
        sexagesimal_to_decimal(self.degrees, self.minutes, self.seconds)
    }
}

impl Display for Sexagesimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{:02}'{:06.3}\"",
            self.degrees.unsigned_abs(),
            self.minutes.unsigned_abs(),
            self.seconds.abs()
        )
    }
}

/// A component that was outside `[0, 60)` but was used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SexagesimalWarning {
    MinutesOutOfRange(i32),
    SecondsOutOfRange(f64),
}

impl Display for SexagesimalWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinutesOutOfRange(m) => write!(f, "minutes {m} not in [0, 60)"),
            Self::SecondsOutOfRange(s) => write!(f, "seconds {s} not in [0, 60)"),
        }
    }
}

/// Decimal degrees plus any range warnings raised while computing them.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalAngle {
    pub degrees: f64,
    pub warnings: Vec<SexagesimalWarning>,
}

impl DecimalAngle {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Split decimal degrees into degrees, minutes and seconds.
///
/// Each field is the truncated integer part of the previous remainder
/// scaled by 60. For a negative input the sign goes on the first
/// non-zero of (degrees, minutes, seconds); the others stay positive.
pub fn decimal_to_sexagesimal(decimal: f64) -> Sexagesimal {
    let mut rest = decimal.abs();
    let degrees = rest.trunc();
    rest = (rest - degrees) * 60.0;
    let minutes = rest.trunc();
    let seconds = (rest - minutes) * 60.0;

    let mut out = Sexagesimal::new(degrees as i32, minutes as i32, seconds);
    if decimal < 0.0 {
        if out.degrees != 0 {
            out.degrees = -out.degrees;
        } else if out.minutes != 0 {
            out.minutes = -out.minutes;
        } else if out.seconds != 0.0 {
            out.seconds = -out.seconds;
        }
    }
    out
}

fn range_warnings(minutes: i32, seconds: f64) -> Vec<SexagesimalWarning> {
    let mut warnings = Vec::new();
    if minutes.unsigned_abs() >= 60 {
        warnings.push(SexagesimalWarning::MinutesOutOfRange(minutes));
    }
    // NaN counts as out of range.
    if !(seconds.abs() < 60.0) {
        warnings.push(SexagesimalWarning::SecondsOutOfRange(seconds));
    }
    warnings
}

fn magnitude(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    let sign = if degrees < 0 || minutes < 0 || seconds < 0.0 {
        -1.0
    } else {
        1.0
    };
    sign * (f64::from(degrees.unsigned_abs())
        + f64::from(minutes.unsigned_abs()) / 60.0
        + seconds.abs() / 3600.0)
}

/// Combine degrees, minutes and seconds into decimal degrees.
///
/// The result is negative if any component is negative. Minutes or
/// seconds with magnitude ≥ 60 are used as given and reported in
/// [`DecimalAngle::warnings`] (and as `tracing` warnings), so callers
/// passing denormalized values still get `|d| + |m|/60 + |s|/3600`.
pub fn sexagesimal_to_decimal(degrees: i32, minutes: i32, seconds: f64) -> DecimalAngle {
    let warnings = range_warnings(minutes, seconds);
    for w in &warnings {
        match w {
            SexagesimalWarning::MinutesOutOfRange(m) => {
                tracing::warn!(minutes = m, "sexagesimal minutes out of range")
            }
            SexagesimalWarning::SecondsOutOfRange(s) => {
                tracing::warn!(seconds = s, "sexagesimal seconds out of range")
            }
        }
    }
    DecimalAngle {
        degrees: magnitude(degrees, minutes, seconds),
        warnings,
    }
}

/// Like [`sexagesimal_to_decimal`] but rejects minutes or seconds outside `[0, 60)`.
pub fn sexagesimal_to_decimal_strict(
    degrees: i32,
    minutes: i32,
    seconds: f64,
) -> Result<f64, FrameError> {
    if !range_warnings(minutes, seconds).is_empty() {
        return Err(FrameError::SexagesimalOutOfRange { minutes, seconds });
    }
    Ok(magnitude(degrees, minutes, seconds))
}

/// Scale every element from degrees to radians.
pub fn degrees_to_radians_in_place(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = v.to_radians();
    }
}

/// Scale every element from radians to degrees.
pub fn radians_to_degrees_in_place(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = v.to_degrees();
    }
}
