//! Mollweide map projection between surface latitude/longitude and the HUD map plane.

mod geo;
mod inverse;
mod map_point;
mod projection;
mod projector;

pub use geo::GeoPoint;
pub use inverse::unproject;
pub use map_point::{MAP_HALF_HEIGHT, MAP_HALF_WIDTH, MapPoint};
pub use projection::{DEFAULT_NEWTON_STEPS, auxiliary_angle, project, project_radians};
pub use projector::{CONVERGED_NEWTON_STEPS, MollweideProjector};
