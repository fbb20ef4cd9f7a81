//! HUD bounding box and the pixel ↔ map-space rescale.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use spinball_mollweide::{MAP_HALF_HEIGHT, MAP_HALF_WIDTH, MapPoint};

/// Placement of the map image in client (window) pixels.
///
/// Local pixel coordinates are measured from the top-left corner with `y`
/// growing downwards; the map ellipse fills the box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for HudRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 400.0, 200.0)
    }
}

impl HudRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    #[must_use]
    pub fn half_size(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Local pixel at the centre of the box.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.half_size()
    }

    /// Client pixel to local pixel.
    #[must_use]
    pub fn client_to_local(&self, client: DVec2) -> DVec2 {
        client - DVec2::new(self.left, self.top)
    }

    /// Local pixel to client pixel.
    #[must_use]
    pub fn local_to_client(&self, local: DVec2) -> DVec2 {
        local + DVec2::new(self.left, self.top)
    }

    /// Whether a local pixel lies within the box (edges inclusive).
    #[must_use]
    pub fn contains_local(&self, local: DVec2) -> bool {
        (0.0..=self.width).contains(&local.x) && (0.0..=self.height).contains(&local.y)
    }

    /// `pixel_x = half_w·(1 + x/2√2)`, `pixel_y = half_h·(1 − y/√2)`.
    #[must_use]
    pub fn map_to_pixel(&self, point: MapPoint) -> DVec2 {
        let half = self.half_size();
        DVec2::new(
            half.x * (1.0 + point.x / MAP_HALF_WIDTH),
            half.y * (1.0 - point.y / MAP_HALF_HEIGHT),
        )
    }

    /// Inverse of [`map_to_pixel`](Self::map_to_pixel).
    ///
    /// A degenerate (zero-sized) box maps every pixel to the map centre.
    #[must_use]
    pub fn pixel_to_map(&self, local: DVec2) -> MapPoint {
        let half = self.half_size();
        if half.x <= 0.0 || half.y <= 0.0 {
            return MapPoint::CENTER;
        }
        MapPoint::new(
            MAP_HALF_WIDTH * (local.x / half.x - 1.0),
            MAP_HALF_HEIGHT * (1.0 - local.y / half.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_center_pixel_is_map_center() {
        let rect = HudRect::new(10.0, 20.0, 300.0, 150.0);
        let p = rect.pixel_to_map(rect.center());
        assert_eq!(p, MapPoint::CENTER);
        assert_eq!(rect.map_to_pixel(MapPoint::CENTER), rect.center());
    }

    #[test]
    fn test_corners() {
        let rect = HudRect::new(0.0, 0.0, 400.0, 200.0);
        let top_left = rect.map_to_pixel(MapPoint::new(-MAP_HALF_WIDTH, MAP_HALF_HEIGHT));
        assert!(top_left.length() < EPSILON);
        let bottom_right = rect.map_to_pixel(MapPoint::new(MAP_HALF_WIDTH, -MAP_HALF_HEIGHT));
        assert!((bottom_right - DVec2::new(400.0, 200.0)).length() < EPSILON);
    }

    #[test]
    fn test_pixel_map_inverse() {
        let rect = HudRect::new(5.0, 5.0, 640.0, 320.0);
        for local in [DVec2::new(13.0, 250.0), DVec2::new(600.5, 4.25), DVec2::new(320.0, 0.0)] {
            let back = rect.map_to_pixel(rect.pixel_to_map(local));
            assert!((back - local).length() < 1e-9, "{local:?} -> {back:?}");
        }
    }

    #[test]
    fn test_client_local_offsets() {
        let rect = HudRect::new(100.0, 50.0, 200.0, 100.0);
        let local = rect.client_to_local(DVec2::new(150.0, 75.0));
        assert_eq!(local, DVec2::new(50.0, 25.0));
        assert_eq!(rect.local_to_client(local), DVec2::new(150.0, 75.0));
    }

    #[test]
    fn test_contains_local() {
        let rect = HudRect::default();
        assert!(rect.contains_local(DVec2::ZERO));
        assert!(rect.contains_local(DVec2::new(400.0, 200.0)));
        assert!(!rect.contains_local(DVec2::new(-1.0, 10.0)));
        assert!(!rect.contains_local(DVec2::new(10.0, 201.0)));
    }

    #[test]
    fn test_zero_size_rect() {
        let rect = HudRect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(rect.pixel_to_map(DVec2::new(3.0, 4.0)), MapPoint::CENTER);
    }
}
