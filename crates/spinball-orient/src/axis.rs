//! Spin-axis construction from gyro angle and clock tilt.
//!
//! The axis starts at the reference direction (+X), is swung about the
//! vertical (+Y) by the gyro angle, and is then rolled about the forward (+Z)
//! axis by the negated clock tilt. The two rotations act on the evolving
//! vector in that order; swapping them yields a different axis.

use glam::{DQuat, DVec3};

use crate::TiltClock;

/// Ball-local reference direction of an untilted, zero-gyro spin axis.
pub const REFERENCE_AXIS: DVec3 = DVec3::X;

/// Vertical axis the gyro angle rotates about.
pub const GYRO_AXIS: DVec3 = DVec3::Y;

/// Forward axis the clock tilt rolls about.
pub const ROLL_AXIS: DVec3 = DVec3::Z;

/// Compute the unit spin axis for a gyro angle (degrees) and clock tilt.
///
/// Never fails. Non-finite gyro input propagates into the result.
#[must_use]
pub fn spin_axis(gyro_degrees: f64, tilt: TiltClock) -> DVec3 {
    let gyro = DQuat::from_axis_angle(GYRO_AXIS, gyro_degrees.to_radians());
    let after_gyro = gyro * REFERENCE_AXIS;

    let roll = DQuat::from_axis_angle(ROLL_AXIS, -tilt.radians());
    let after_tilt = roll * after_gyro;

    after_tilt.normalize_or_zero()
}
