//! Inverse Mollweide projection: map space back to latitude/longitude.

use std::f64::consts::{PI, SQRT_2};

use crate::{GeoPoint, MAP_HALF_WIDTH, MapPoint};

/// Floor on `cos θ` when dividing out longitude.
const COS_FLOOR: f64 = 1e-12;

/// Recover degrees from a map point.
///
/// Closed form, no iteration. Arguments to `asin` are clamped to `[-1, 1]`
/// and `cos θ` is floored so the result is always finite; the output itself
/// is not clamped. Points outside the map ellipse produce longitudes beyond
/// ±180° that callers are expected to reject with [`GeoPoint::is_valid`].
#[must_use]
pub fn unproject(point: MapPoint) -> GeoPoint {
    let theta = (point.y / SQRT_2).clamp(-1.0, 1.0).asin();

    let lambda = PI * point.x / (MAP_HALF_WIDTH * theta.cos().max(COS_FLOOR));
    let phi = ((2.0 * theta + (2.0 * theta).sin()) / PI)
        .clamp(-1.0, 1.0)
        .asin();

    GeoPoint::new(phi.to_degrees(), lambda.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{auxiliary_angle, project, project_radians};
    use crate::{MAP_HALF_HEIGHT, MAP_HALF_WIDTH};

    #[test]
    fn test_center_is_origin() {
        let g = unproject(MapPoint::CENTER);
        assert_eq!(g, GeoPoint::ORIGIN);
    }

    #[test]
    fn test_top_is_north_pole() {
        let g = unproject(MapPoint::new(0.0, MAP_HALF_HEIGHT));
        assert!((g.lat - 90.0).abs() < 1e-6);
        assert_eq!(g.lon, 0.0);
    }

    #[test]
    fn test_equator_rim() {
        let g = unproject(MapPoint::new(MAP_HALF_WIDTH, 0.0));
        assert!((g.lon - 180.0).abs() < 1e-9);
        assert_eq!(g.lat, 0.0);
    }

    #[test]
    fn test_outside_ellipse_is_out_of_range() {
        // Box corner: beyond the ellipse, longitude overshoots.
        let g = unproject(MapPoint::new(MAP_HALF_WIDTH, 1.0));
        assert!(g.lat.is_finite() && g.lon.is_finite());
        assert!(!g.is_valid(), "{g:?} should be out of range");

        // Off the pole sideways: huge but finite longitude.
        let g = unproject(MapPoint::new(0.5, MAP_HALF_HEIGHT));
        assert!(g.lon.is_finite());
        assert!(!g.is_valid());
    }

    #[test]
    fn test_drifted_y_is_clamped() {
        let g = unproject(MapPoint::new(0.0, MAP_HALF_HEIGHT * (1.0 + 1e-15)));
        assert!(!g.lat.is_nan());
        assert!((g.lat - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_exact_inverse_of_converged_forward() {
        for lat in (-85..=85).step_by(5) {
            for lon in (-175..=175).step_by(25) {
                let (lat, lon) = (f64::from(lat), f64::from(lon));
                let p = project_radians(lat.to_radians(), lon.to_radians(), 40);
                let g = unproject(p);
                assert!((g.lat - lat).abs() < 1e-6, "lat {lat} -> {}", g.lat);
                assert!((g.lon - lon).abs() < 1e-6, "lon {lon} -> {}", g.lon);
            }
        }
    }

    #[test]
    fn test_single_step_roundtrip_bounds() {
        let mut worst_low = 0.0_f64;
        let mut worst_mid = 0.0_f64;
        let mut worst_all = 0.0_f64;
        for tenth in -899..=899 {
            let lat = f64::from(tenth) / 10.0;
            let g = unproject(project(GeoPoint::new(lat, -123.0)));
            assert!((g.lon + 123.0).abs() < 1e-9, "lon drift at lat {lat}: {}", g.lon);

            let err = (g.lat - lat).abs();
            if lat.abs() <= 30.0 {
                worst_low = worst_low.max(err);
            }
            if lat.abs() < 80.0 {
                worst_mid = worst_mid.max(err);
            }
            worst_all = worst_all.max(err);
        }
        assert!(worst_low <= 0.5, "|lat| <= 30 error {worst_low}");
        assert!(worst_mid <= 9.0, "|lat| < 80 error {worst_mid}");
        assert!(worst_all <= 13.0, "overall error {worst_all}");
    }

    #[test]
    fn test_inverse_recovers_auxiliary_angle() {
        let phi = 0.6;
        let theta = auxiliary_angle(phi, 1);
        let p = project_radians(phi, 0.0, 1);
        assert!(((p.y / SQRT_2).asin() - theta).abs() < 1e-12);
    }
}
