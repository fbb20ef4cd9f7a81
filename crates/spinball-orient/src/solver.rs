//! Pitch descriptor to ball orientation.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::{SurfaceConvention, TiltClock, alignment_rotation, spin_axis, surface_vector};

/// User-facing pitch parameters, rebuilt from UI state on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchDescriptor {
    /// Swing of the spin axis about the vertical, in degrees.
    pub gyro_degrees: f64,
    /// Clock-face tilt of the spin axis.
    pub tilt: TiltClock,
    /// Latitude of the seam-contact point, degrees in \[-90, 90\].
    pub surface_lat: f64,
    /// Longitude of the seam-contact point, degrees in \[-180, 180\].
    pub surface_lon: f64,
}

impl PitchDescriptor {
    #[must_use]
    pub fn new(gyro_degrees: f64, tilt: TiltClock, surface_lat: f64, surface_lon: f64) -> Self {
        Self {
            gyro_degrees,
            tilt,
            surface_lat,
            surface_lon,
        }
    }
}

/// Solved orientation for one descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Unit spin axis in ball-local space.
    pub spin_axis: DVec3,
    /// Unit vector of the seam-contact point before alignment.
    pub surface: DVec3,
    /// Shortest-arc rotation taking `surface` onto `spin_axis`.
    pub alignment: DQuat,
}

impl Orientation {
    /// Endpoints `(tail, head)` of a spin-axis indicator of the given length,
    /// centred on the ball.
    #[must_use]
    pub fn axis_arrow(&self, length: f64) -> (DVec3, DVec3) {
        let half = self.spin_axis * (length * 0.5);
        (-half, half)
    }
}

/// Solve spin axis and alignment using the default surface convention.
#[must_use]
pub fn solve_orientation(descriptor: &PitchDescriptor) -> Orientation {
    solve_orientation_with(descriptor, SurfaceConvention::default())
}

/// Solve spin axis and alignment with an explicit surface convention.
#[must_use]
pub fn solve_orientation_with(
    descriptor: &PitchDescriptor,
    convention: SurfaceConvention,
) -> Orientation {
    let axis = spin_axis(descriptor.gyro_degrees, descriptor.tilt);
    let surface = surface_vector(descriptor.surface_lat, descriptor.surface_lon, convention);
    let alignment = alignment_rotation(surface, axis);

    Orientation {
        spin_axis: axis,
        surface,
        alignment,
    }
}
