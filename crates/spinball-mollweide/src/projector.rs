//! Configurable projector bundling forward and inverse mappings.

use serde::{Deserialize, Serialize};

use crate::projection::{DEFAULT_NEWTON_STEPS, project_radians};
use crate::{GeoPoint, MapPoint, inverse};

/// Step count of [`MollweideProjector::converged`]; enough for sub-nanodegree
/// agreement everywhere short of the poles.
pub const CONVERGED_NEWTON_STEPS: u32 = 20;

/// Bidirectional Mollweide mapping with a chosen Newton step count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MollweideProjector {
    /// Maximum Newton updates in the forward auxiliary-angle solve.
    pub newton_steps: u32,
}

impl Default for MollweideProjector {
    fn default() -> Self {
        Self {
            newton_steps: DEFAULT_NEWTON_STEPS,
        }
    }
}

impl MollweideProjector {
    #[must_use]
    pub const fn new(newton_steps: u32) -> Self {
        Self { newton_steps }
    }

    /// Projector that iterates the auxiliary solve to convergence.
    #[must_use]
    pub const fn converged() -> Self {
        Self::new(CONVERGED_NEWTON_STEPS)
    }

    /// Geographic degrees to map space.
    #[must_use]
    pub fn project(&self, geo: GeoPoint) -> MapPoint {
        project_radians(geo.lat.to_radians(), geo.lon.to_radians(), self.newton_steps)
    }

    /// Map space to geographic degrees. Independent of the step count.
    #[must_use]
    pub fn unproject(&self, point: MapPoint) -> GeoPoint {
        inverse::unproject(point)
    }
}
