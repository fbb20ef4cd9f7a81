//! Planar Mollweide map coordinates.

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

/// Half-width of the map ellipse, `2√2`.
pub const MAP_HALF_WIDTH: f64 = 2.0 * SQRT_2;

/// Half-height of the map ellipse, `√2`.
pub const MAP_HALF_HEIGHT: f64 = SQRT_2;

/// A point in map space. The projection's image is the ellipse with
/// semi-axes [`MAP_HALF_WIDTH`] and [`MAP_HALF_HEIGHT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inside the bounding box `[-2√2, 2√2] × [-√2, √2]`.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        self.x.abs() <= MAP_HALF_WIDTH && self.y.abs() <= MAP_HALF_HEIGHT
    }

    /// Inside (or on) the map ellipse `x²/8 + y²/2 <= 1`, with a small slack
    /// for rounding on the rim.
    #[must_use]
    pub fn inside_ellipse(&self) -> bool {
        let nx = self.x / MAP_HALF_WIDTH;
        let ny = self.y / MAP_HALF_HEIGHT;
        nx * nx + ny * ny <= 1.0 + 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_inside() {
        assert!(MapPoint::CENTER.in_bounds());
        assert!(MapPoint::CENTER.inside_ellipse());
    }

    #[test]
    fn test_extremes_on_rim() {
        assert!(MapPoint::new(MAP_HALF_WIDTH, 0.0).inside_ellipse());
        assert!(MapPoint::new(0.0, -MAP_HALF_HEIGHT).inside_ellipse());
    }

    #[test]
    fn test_box_corner_outside_ellipse() {
        let corner = MapPoint::new(MAP_HALF_WIDTH, MAP_HALF_HEIGHT);
        assert!(corner.in_bounds());
        assert!(!corner.inside_ellipse());
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!MapPoint::new(3.0, 0.0).in_bounds());
        assert!(!MapPoint::new(0.0, -1.5).in_bounds());
    }
}
