//! Viewer state owned by the UI layer.
//!
//! The orientation and projection crates are pure; everything that changes
//! while the viewer runs (current pitch, HUD placement, spin rate) lives in
//! [`PitchSession`] and is passed to them explicitly.

use glam::{DQuat, DVec2, DVec3};
use spinball_config::Config;
use spinball_hud::{ClickOutcome, HudMarker, HudRect, handle_click};
use spinball_mollweide::{GeoPoint, MollweideProjector};
use spinball_orient::{
    Orientation, PitchDescriptor, SpinRate, SurfaceConvention, TiltClock, ball_orientation,
    solve_orientation_with,
};

/// Everything the renderer and HUD need for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Rotation to apply to the ball mesh.
    pub ball_rotation: DQuat,
    /// Spin-axis indicator endpoints `(tail, head)`.
    pub arrow: (DVec3, DVec3),
    /// Contact-point marker on the HUD map.
    pub marker: HudMarker,
}

/// Mutable viewer state.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchSession {
    descriptor: PitchDescriptor,
    hud: HudRect,
    projector: MollweideProjector,
    convention: SurfaceConvention,
    rate: SpinRate,
    arrow_length: f64,
}

impl Default for PitchSession {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PitchSession {
    /// Build the initial state from loaded settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            descriptor: config.pitch,
            hud: HudRect::new(
                config.hud.left,
                config.hud.top,
                config.hud.width,
                config.hud.height,
            ),
            projector: MollweideProjector::new(config.projection.newton_steps),
            convention: config.ball.surface_convention,
            rate: SpinRate::from_rpm(config.ball.spin_rpm),
            arrow_length: config.ball.arrow_length,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> PitchDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn hud(&self) -> HudRect {
        self.hud
    }

    #[must_use]
    pub fn projector(&self) -> MollweideProjector {
        self.projector
    }

    #[must_use]
    pub fn spin_rate(&self) -> SpinRate {
        self.rate
    }

    pub fn set_tilt(&mut self, tilt: TiltClock) {
        self.descriptor.tilt = tilt;
    }

    pub fn set_gyro(&mut self, gyro_degrees: f64) {
        self.descriptor.gyro_degrees = gyro_degrees;
    }

    pub fn set_spin_rate(&mut self, rate: SpinRate) {
        self.rate = rate;
    }

    pub fn set_hud(&mut self, hud: HudRect) {
        self.hud = hud;
    }

    /// Replace the surface contact point. Out-of-range points are ignored
    /// and `false` is returned.
    pub fn set_surface(&mut self, geo: GeoPoint) -> bool {
        if !geo.is_valid() {
            tracing::debug!(lat = geo.lat, lon = geo.lon, "surface point out of range ignored");
            return false;
        }
        self.descriptor.surface_lat = geo.lat;
        self.descriptor.surface_lon = geo.lon;
        true
    }

    /// Current surface contact point.
    #[must_use]
    pub fn surface(&self) -> GeoPoint {
        GeoPoint::new(self.descriptor.surface_lat, self.descriptor.surface_lon)
    }

    /// Handle a click on the HUD; accepted clicks move the contact point.
    pub fn click_hud(&mut self, client: DVec2) -> ClickOutcome {
        let outcome = handle_click(&self.hud, &self.projector, client);
        if let ClickOutcome::Accepted(geo) = outcome {
            self.set_surface(geo);
        }
        outcome
    }

    /// Re-solve the orientation for the current pitch.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        solve_orientation_with(&self.descriptor, self.convention)
    }

    /// Marker for the current contact point.
    #[must_use]
    pub fn marker(&self) -> HudMarker {
        HudMarker::place(&self.hud, &self.projector, self.surface())
    }

    /// Render inputs at `elapsed_secs` since the pitch was set.
    #[must_use]
    pub fn frame(&self, elapsed_secs: f64) -> Frame {
        let orientation = self.orientation();
        Frame {
            ball_rotation: ball_orientation(&orientation, self.rate, elapsed_secs),
            arrow: orientation.axis_arrow(self.arrow_length),
            marker: self.marker(),
        }
    }
}
