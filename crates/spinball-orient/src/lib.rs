//! Ball orientation from pitch descriptors: clock tilt, gyro swing, seam-contact alignment and spin.

mod alignment;
mod axis;
mod clock;
mod error;
mod solver;
mod spin;
mod surface;

pub use alignment::alignment_rotation;
pub use axis::{GYRO_AXIS, REFERENCE_AXIS, ROLL_AXIS, spin_axis};
pub use clock::{MINUTES_PER_DIAL, TiltClock, tilt_radians};
pub use error::TiltClockError;
pub use solver::{Orientation, PitchDescriptor, solve_orientation, solve_orientation_with};
pub use spin::{SpinRate, ball_orientation};
pub use surface::{SurfaceConvention, surface_vector};
