//! Forward Mollweide projection: latitude/longitude to map space.
//!
//! The auxiliary angle θ solves `2θ + sin 2θ = π sin φ`. Display use takes a
//! single Newton step from `θ₀ = φ`, which is exact at the equator and the
//! poles and drifts by a few degrees of latitude in between. More steps
//! converge to the exact projection.

use std::f64::consts::{PI, SQRT_2};

use crate::{GeoPoint, MAP_HALF_WIDTH, MapPoint};

/// Newton steps taken by [`project`].
pub const DEFAULT_NEWTON_STEPS: u32 = 1;

/// Below this derivative the Newton step is skipped (θ at a pole).
const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Updates smaller than this end the iteration early.
const CONVERGENCE_EPSILON: f64 = 1e-12;

/// Solve `2θ + sin 2θ = π sin φ` with up to `steps` Newton updates from `θ₀ = φ`.
#[must_use]
pub fn auxiliary_angle(phi: f64, steps: u32) -> f64 {
    let target = PI * phi.sin();
    let mut theta = phi;

    for _ in 0..steps {
        let cos = theta.cos();
        let derivative = 4.0 * cos * cos;
        if derivative < DERIVATIVE_EPSILON {
            break;
        }
        let residual = 2.0 * theta + (2.0 * theta).sin() - target;
        let delta = residual / derivative;
        theta -= delta;
        if delta.abs() < CONVERGENCE_EPSILON {
            break;
        }
    }

    theta
}

/// Project latitude `phi` and longitude `lambda` (radians).
#[must_use]
pub fn project_radians(phi: f64, lambda: f64, steps: u32) -> MapPoint {
    let theta = auxiliary_angle(phi, steps);
    MapPoint::new(
        MAP_HALF_WIDTH / PI * lambda * theta.cos(),
        SQRT_2 * theta.sin(),
    )
}

/// Project a point in degrees using the single-step default.
#[must_use]
pub fn project(geo: GeoPoint) -> MapPoint {
    project_radians(geo.lat.to_radians(), geo.lon.to_radians(), DEFAULT_NEWTON_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAP_HALF_HEIGHT, MAP_HALF_WIDTH};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_origin_is_center() {
        let p = project(GeoPoint::ORIGIN);
        assert_eq!(p, MapPoint::CENTER);
    }

    #[test]
    fn test_north_pole_is_top() {
        for lon in [-180.0, -90.0, 0.0, 45.0, 180.0] {
            let p = project(GeoPoint::new(90.0, lon));
            assert!((p.y - MAP_HALF_HEIGHT).abs() < EPSILON, "y = {} at lon {lon}", p.y);
            assert!(p.x.is_finite(), "x not finite at lon {lon}");
            assert!(p.x.abs() < 1e-9);
        }
    }

    #[test]
    fn test_south_pole_is_bottom() {
        let p = project(GeoPoint::new(-90.0, 120.0));
        assert!((p.y + MAP_HALF_HEIGHT).abs() < EPSILON);
        assert!(p.x.is_finite());
    }

    #[test]
    fn test_equator_edges() {
        let east = project(GeoPoint::new(0.0, 180.0));
        let west = project(GeoPoint::new(0.0, -180.0));
        assert!((east.x - MAP_HALF_WIDTH).abs() < EPSILON);
        assert!((west.x + MAP_HALF_WIDTH).abs() < EPSILON);
        assert_eq!(east.y, 0.0);
    }

    #[test]
    fn test_single_step_matches_hand_computation() {
        let phi = 45f64.to_radians();
        let residual = 2.0 * phi + (2.0 * phi).sin() - PI * phi.sin();
        let expected = phi - residual / (4.0 * phi.cos() * phi.cos());
        assert_eq!(auxiliary_angle(phi, 1), expected);
    }

    #[test]
    fn test_zero_steps_is_identity() {
        assert_eq!(auxiliary_angle(0.7, 0), 0.7);
    }

    #[test]
    fn test_converged_angle_satisfies_equation() {
        for deg in [-85.0, -60.0, -10.0, 5.0, 33.0, 72.0, 89.0] {
            let phi = f64::to_radians(deg);
            let theta = auxiliary_angle(phi, 50);
            let residual = 2.0 * theta + (2.0 * theta).sin() - PI * phi.sin();
            assert!(residual.abs() < 1e-10, "residual {residual} at {deg} degrees");
        }
    }

    #[test]
    fn test_output_within_ellipse() {
        for lat in (-90..=90).step_by(5) {
            for lon in (-180..=180).step_by(10) {
                let p = project(GeoPoint::new(f64::from(lat), f64::from(lon)));
                assert!(p.in_bounds(), "({lat}, {lon}) -> {p:?}");
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let a = project(GeoPoint::new(37.0, 64.0));
        let b = project(GeoPoint::new(-37.0, -64.0));
        assert!((a.x + b.x).abs() < EPSILON);
        assert!((a.y + b.y).abs() < EPSILON);
    }
}
