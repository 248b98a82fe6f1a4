//! Systems - per-frame logic that operates on scene components

mod doors;
mod drift;
mod flicker;
mod portals;
mod sway;

pub use doors::*;
pub use drift::*;
pub use flicker::*;
pub use portals::*;
pub use sway::*;
