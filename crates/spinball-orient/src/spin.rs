//! Spin rate and per-frame ball rotation.

use std::f64::consts::TAU;

use glam::DQuat;
use serde::{Deserialize, Serialize};

use crate::Orientation;

/// Spin rate in revolutions per minute.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SpinRate(pub f64);

impl SpinRate {
    #[must_use]
    pub const fn from_rpm(rpm: f64) -> Self {
        Self(rpm)
    }

    #[inline]
    #[must_use]
    pub fn rpm(self) -> f64 {
        self.0
    }

    /// Angular speed in radians per second.
    #[inline]
    #[must_use]
    pub fn radians_per_second(self) -> f64 {
        self.0 * TAU / 60.0
    }

    /// Spin angle after `elapsed_secs`, wrapped into `[0, 2π)`.
    #[must_use]
    pub fn angle_at(self, elapsed_secs: f64) -> f64 {
        (self.radians_per_second() * elapsed_secs).rem_euclid(TAU)
    }
}

/// Rotation applied to the ball mesh at `elapsed_secs`.
///
/// The seam is first aligned with the spin axis, then spun about it. The spin
/// axis itself is a fixed point of the returned rotation.
#[must_use]
pub fn ball_orientation(orientation: &Orientation, rate: SpinRate, elapsed_secs: f64) -> DQuat {
    let spin = DQuat::from_axis_angle(orientation.spin_axis, rate.angle_at(elapsed_secs));
    (spin * orientation.alignment).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PitchDescriptor, TiltClock, solve_orientation};

    const EPSILON: f64 = 1e-10;

    fn sample() -> Orientation {
        solve_orientation(&PitchDescriptor::new(20.0, TiltClock::new(1, 30), 10.0, 35.0))
    }

    #[test]
    fn test_rpm_conversion() {
        let rate = SpinRate::from_rpm(60.0);
        assert!((rate.radians_per_second() - TAU).abs() < EPSILON);
        assert_eq!(rate.rpm(), 60.0);
    }

    #[test]
    fn test_angle_wraps() {
        let rate = SpinRate::from_rpm(60.0);
        assert!(rate.angle_at(1.0) < EPSILON || (rate.angle_at(1.0) - TAU).abs() < EPSILON);
        assert!((rate.angle_at(0.25) - TAU / 4.0).abs() < EPSILON);
        let a = rate.angle_at(-0.25);
        assert!((0.0..TAU).contains(&a));
        assert!((a - 3.0 * TAU / 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_time_is_alignment() {
        let o = sample();
        let q = ball_orientation(&o, SpinRate::from_rpm(2400.0), 0.0);
        assert!(q.abs_diff_eq(o.alignment, EPSILON) || q.abs_diff_eq(-o.alignment, EPSILON));
    }

    #[test]
    fn test_spin_axis_is_fixed() {
        let o = sample();
        let rate = SpinRate::from_rpm(2200.0);
        for frame in 0..30 {
            let t = f64::from(frame) / 60.0;
            let q = ball_orientation(&o, rate, t);
            // The contact point stays on the axis while the ball spins.
            let contact = q * o.surface;
            assert!(
                (contact - o.spin_axis).length() < 1e-9,
                "contact drifted at t={t}: {contact:?}"
            );
        }
    }

    #[test]
    fn test_off_axis_point_moves() {
        let o = sample();
        let off_axis = o.spin_axis.any_orthonormal_vector();
        let rate = SpinRate::from_rpm(600.0);
        let local = o.alignment.inverse() * off_axis;
        let start = ball_orientation(&o, rate, 0.0) * local;
        let later = ball_orientation(&o, rate, 0.01) * local;
        assert!((start - later).length() > 1e-3);
        assert!((start.dot(o.spin_axis) - later.dot(o.spin_axis)).abs() < 1e-9);
    }
}
