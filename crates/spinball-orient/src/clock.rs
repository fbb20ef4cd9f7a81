//! Spin-axis tilt expressed as a position on an analog clock face.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TiltClockError;

/// Minutes in one lap of a 12-hour dial.
pub const MINUTES_PER_DIAL: u32 = 720;

/// A tilt reading such as `1:30`.
///
/// The hour is stored as given and folded into `0..12` only when the reading
/// is converted to an angle, so `12:00` and `0:00` describe the same tilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TiltClock {
    /// Hour hand position. Values `>= 12` wrap around the dial.
    pub hour: u32,
    /// Minute hand position, normally `0..60`.
    pub minute: u32,
}

impl TiltClock {
    /// Twelve o'clock, the untilted reference.
    pub const NOON: Self = Self { hour: 0, minute: 0 };

    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since twelve o'clock, after folding the hour.
    ///
    /// Widened to `u64` so any `u32` minute is accepted without overflow.
    #[inline]
    #[must_use]
    pub fn dial_minutes(&self) -> u64 {
        u64::from(self.hour % 12) * 60 + u64::from(self.minute)
    }

    /// Rotation about the roll axis: `2π · minutes / 720`.
    #[inline]
    #[must_use]
    pub fn radians(&self) -> f64 {
        TAU * self.dial_minutes() as f64 / f64::from(MINUTES_PER_DIAL)
    }
}

/// Convert a clock reading to its tilt angle in radians.
#[inline]
#[must_use]
pub fn tilt_radians(clock: TiltClock) -> f64 {
    clock.radians()
}

impl fmt::Display for TiltClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour}:{:02}", self.minute)
    }
}

impl FromStr for TiltClock {
    type Err = TiltClockError;

    /// Parse `H:MM` with an hour in `0..=12` and a minute in `0..60`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| TiltClockError::MissingSeparator(trimmed.to_string()))?;

        let hour: u32 = hour
            .trim()
            .parse()
            .map_err(|_| TiltClockError::InvalidHour(hour.trim().to_string()))?;
        let minute: u32 = minute
            .trim()
            .parse()
            .map_err(|_| TiltClockError::InvalidMinute(minute.trim().to_string()))?;

        if hour > 12 {
            return Err(TiltClockError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TiltClockError::MinuteOutOfRange(minute));
        }
        Ok(Self::new(hour, minute))
    }
}
