//! Error types for angle and coordinate conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from frame and angle conversions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// Sexagesimal minutes or seconds were not in `[0, 60)`.
    SexagesimalOutOfRange { minutes: i32, seconds: f64 },
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SexagesimalOutOfRange { minutes, seconds } => write!(
                f,
                "sexagesimal component out of range: minutes {minutes}, seconds {seconds}"
            ),
        }
    }
}

impl Error for FrameError {}
