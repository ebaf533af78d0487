//! Error types for time capture and formatting.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::instant::Instant;

/// Errors from reading the system clock or rendering an instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The system clock could not be read.
    ClockUnavailable(String),
    /// Instant lies outside the representable calendar range.
    OutOfRange(Instant),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClockUnavailable(msg) => write!(f, "system clock unavailable: {msg}"),
            Self::OutOfRange(t) => write!(
                f,
                "instant {}s {}ns outside the calendar range",
                t.seconds, t.nanoseconds
            ),
        }
    }
}

impl Error for TimeError {}

impl From<std::time::SystemTimeError> for TimeError {
    fn from(e: std::time::SystemTimeError) -> Self {
        Self::ClockUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let e = TimeError::OutOfRange(Instant::new(i64::MAX, 0));
        assert!(e.to_string().contains("outside the calendar range"));
    }
}
