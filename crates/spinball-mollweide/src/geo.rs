//! Geographic coordinates on the ball surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A surface point in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees. Valid range: \[-90, 90\].
    pub lat: f64,
    /// Longitude in degrees. Valid range: \[-180, 180\].
    pub lon: f64,
}

impl GeoPoint {
    pub const ORIGIN: Self = Self { lat: 0.0, lon: 0.0 };

    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are finite and inside their documented ranges.
    ///
    /// The projector never clamps; callers use this to reject results such as
    /// an unprojected click that fell outside the map ellipse.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.lon >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.1}\u{00B0}{}, {:.1}\u{00B0}{}",
            self.lat.abs(),
            lat_dir,
            self.lon.abs(),
            lon_dir,
        )
    }
}
