//! Components attached to scene entities.
//!
//! All pure data. Systems in [`crate::systems`] query and mutate these;
//! the viewer reads them to mirror the world into its renderer.

mod common;
mod fx;
mod interact;
mod stage;

pub use common::*;
pub use fx::*;
pub use interact::*;
pub use stage::*;
