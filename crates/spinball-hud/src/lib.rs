//! Heads-up map display: pixel rescaling, contact-point marker and click handling.

mod click;
mod marker;
mod rect;

pub use click::{ClickOutcome, IgnoreReason, handle_click};
pub use marker::HudMarker;
pub use rect::HudRect;
