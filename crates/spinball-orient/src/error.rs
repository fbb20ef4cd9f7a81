//! Errors raised while reading pitch input from text.

/// Failure to parse a tilt clock reading such as `1:30`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TiltClockError {
    /// The text has no `:` between hour and minute.
    #[error("expected H:MM, got {0:?}")]
    MissingSeparator(String),

    /// The hour part is not a non-negative integer.
    #[error("invalid hour {0:?}")]
    InvalidHour(String),

    /// The minute part is not a non-negative integer.
    #[error("invalid minute {0:?}")]
    InvalidMinute(String),

    /// Hour above 12.
    #[error("hour {0} is outside 0..=12")]
    HourOutOfRange(u32),

    /// Minute of 60 or more.
    #[error("minute {0} is outside 0..60")]
    MinuteOutOfRange(u32),
}
