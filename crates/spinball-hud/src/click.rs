//! Turning a HUD click into a new surface contact point.

use glam::DVec2;
use spinball_mollweide::{GeoPoint, MapPoint, MollweideProjector};

use crate::HudRect;

/// Why a click was not turned into a surface point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The click landed outside the HUD box.
    OutsideHud,
    /// Inside the box but outside the projection's valid domain.
    OutsideMap,
}

/// Result of interpreting a click on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The click maps to a valid surface point.
    Accepted(GeoPoint),
    /// The click does nothing.
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    #[must_use]
    pub fn accepted(self) -> Option<GeoPoint> {
        match self {
            Self::Accepted(geo) => Some(geo),
            Self::Ignored(_) => None,
        }
    }
}

/// Interpret a click given in client pixels.
///
/// Out-of-range results are ignored silently (logged at debug level only).
#[must_use]
pub fn handle_click(rect: &HudRect, projector: &MollweideProjector, client: DVec2) -> ClickOutcome {
    let local = rect.client_to_local(client);
    if !rect.contains_local(local) {
        tracing::debug!(x = client.x, y = client.y, "HUD click outside map box ignored");
        return ClickOutcome::Ignored(IgnoreReason::OutsideHud);
    }

    let point: MapPoint = rect.pixel_to_map(local);
    if !point.inside_ellipse() {
        tracing::debug!(map_x = point.x, map_y = point.y, "HUD click outside map ellipse ignored");
        return ClickOutcome::Ignored(IgnoreReason::OutsideMap);
    }

    let geo = projector.unproject(point);
    if !geo.is_valid() {
        tracing::debug!(
            map_x = point.x,
            map_y = point.y,
            lat = geo.lat,
            lon = geo.lon,
            "HUD click outside projection ignored"
        );
        return ClickOutcome::Ignored(IgnoreReason::OutsideMap);
    }

    tracing::trace!(lat = geo.lat, lon = geo.lon, "HUD click accepted");
    ClickOutcome::Accepted(geo)
}
