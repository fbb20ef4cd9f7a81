//! Seam-contact surface point: latitude/longitude on the ball to a local vector.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How geographic Cartesian components map onto the ball's local axes.
///
/// Geographic components are `gx = cos φ cos λ`, `gy = cos φ sin λ` and
/// `gz = sin φ`. Both conventions put the pole on local +Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceConvention {
    /// `(gx, gz, gy)`: `(0°, 0°)` lands on +X, the spin-axis reference.
    #[default]
    XForward,
    /// `(gy, gz, gx)`: `(0°, 0°)` lands on +Z, facing the camera.
    ZForward,
}

impl SurfaceConvention {
    /// Remap geographic `(gx, gy, gz)` into ball-local space.
    #[inline]
    #[must_use]
    pub fn to_local(self, geo: DVec3) -> DVec3 {
        match self {
            Self::XForward => DVec3::new(geo.x, geo.z, geo.y),
            Self::ZForward => DVec3::new(geo.y, geo.z, geo.x),
        }
    }
}

/// Unit vector for a surface point given in degrees.
///
/// Inputs are not range-checked; any finite pair yields a unit vector.
#[must_use]
pub fn surface_vector(lat_deg: f64, lon_deg: f64, convention: SurfaceConvention) -> DVec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let geo = DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin());
    convention.to_local(geo).normalize_or_zero()
}
