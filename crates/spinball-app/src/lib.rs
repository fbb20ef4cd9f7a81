//! Spinball viewer application layer: platform directories and the mutable
//! session state that drives the pure orientation and projection crates.

pub mod platform;
pub mod session;

pub use platform::{PlatformDirs, PlatformError};
pub use session::{Frame, PitchSession};
