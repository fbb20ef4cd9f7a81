//! Marker showing the surface contact point on the HUD map.

use glam::DVec2;
use spinball_mollweide::{GeoPoint, MapPoint, MollweideProjector};

use crate::HudRect;

/// Where to draw the contact-point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudMarker {
    /// The surface point being marked.
    pub geo: GeoPoint,
    /// Its projection in map space.
    pub map: MapPoint,
    /// Local pixel position inside the HUD box.
    pub pixel: DVec2,
}

impl HudMarker {
    /// Project `geo` and rescale it into the HUD box.
    #[must_use]
    pub fn place(rect: &HudRect, projector: &MollweideProjector, geo: GeoPoint) -> Self {
        let map = projector.project(geo);
        Self {
            geo,
            map,
            pixel: rect.map_to_pixel(map),
        }
    }

    /// Marker position in client pixels.
    #[must_use]
    pub fn client_position(&self, rect: &HudRect) -> DVec2 {
        rect.local_to_client(self.pixel)
    }
}
