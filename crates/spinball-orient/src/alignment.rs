//! Minimal rotation carrying the surface contact vector onto the spin axis.

use glam::{DQuat, DVec3};

/// Below this cross-product length the two vectors are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Shortest-arc rotation with `rotation * from == to`.
///
/// Both inputs are normalized first. Collinear inputs resolve
/// deterministically: parallel gives the identity and anti-parallel gives a
/// half turn about a vector orthogonal to `from`. A zero-length input also
/// gives the identity.
#[must_use]
pub fn alignment_rotation(from: DVec3, to: DVec3) -> DQuat {
    let from = from.normalize_or_zero();
    let to = to.normalize_or_zero();
    if from == DVec3::ZERO || to == DVec3::ZERO {
        return DQuat::IDENTITY;
    }

    let dot = from.dot(to).clamp(-1.0, 1.0);
    let cross = from.cross(to);
    let sin = cross.length();

    if sin < COLLINEAR_EPSILON {
        if dot > 0.0 {
            return DQuat::IDENTITY;
        }
        return DQuat::from_axis_angle(from.any_orthonormal_vector(), std::f64::consts::PI);
    }

    DQuat::from_axis_angle(cross / sin, dot.acos())
}
