//! Gloam Core - Scene Session Engine
//!
//! One disposable session per room of the manor: procedural textures, a
//! one-shot scene build into an ECS world, and a frame-driven controller
//! for doors, locomotion, triggers, and teardown.
//!
//! # Architecture
//!
//! The scene is an Entity Component System via `hecs`:
//! - **Entities**: props, door pivots, lights, particle clouds, screens
//! - **Components**: pure data (Placement, Surface, Clickable, Flicker...)
//! - **Systems**: per-frame logic that queries and updates components
//!
//! The renderer is deliberately absent. A host (the Bevy viewer) feeds
//! input intents in, calls [`SceneSession::update`] once per frame, reads
//! the world out, and draws. Everything the host must release on teardown
//! is accounted for by the [`ledger::ResourceLedger`].
//!
//! # Example
//!
//! ```rust,no_run
//! use gloam_core::prelude::*;
//!
//! let tier = TierSettings::for_tier(PerfTier::Medium);
//! let content = ManorContent::default();
//! let mut session = SceneSession::build(RoomKey::Hall, &tier, &content);
//!
//! loop {
//!     session.update(1.0 / 60.0);
//!     for event in session.drain_events() {
//!         // route EnterRoom / ExitRoom / OpenPanel
//!         let _ = event;
//!     }
//! }
//! ```

pub mod assets;
pub mod build;
pub mod components;
pub mod config;
pub mod events;
pub mod ledger;
pub mod pick;
pub mod session;
pub mod systems;
pub mod textures;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::SessionEvent;
    pub use crate::ledger::{DisposeReport, ResourceId, ResourceKind, ResourceLedger};
    pub use crate::pick::Ray;
    pub use crate::session::SceneSession;
    pub use gloam_logic::content::{ManorContent, PanelKey, RoomKey};
    pub use gloam_logic::tiers::{PerfTier, TierSettings};
}
