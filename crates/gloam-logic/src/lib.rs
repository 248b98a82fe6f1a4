//! Pure interaction and lifecycle rules for Gloam.
//!
//! This crate contains every per-frame rule the scene engine applies,
//! independent of any renderer, window system, or clock. Functions take
//! plain data and return results, making them unit-testable and portable
//! between the native viewer and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`color`] | Hex color parsing with graceful fallback, channel scaling |
//! | [`content`] | Manor content records and validation |
//! | [`door`] | Damped door swing state machine |
//! | [`ease`] | Exponential approach toward a target value |
//! | [`stairs`] | Stair region mapping from floor position to climb height |
//! | [`tap`] | Double-activation windows and drag suppression |
//! | [`tiers`] | Performance tiers, startup probe, FPS downgrade governor |
//! | [`trigger`] | Named trigger volumes with edge-triggered enter/exit |
//! | [`walk`] | Held-key locomotion, scroll glide, walk bounds clamping |
//! | [`wrap`] | Greedy word wrap against a measured line budget |

pub mod color;
pub mod content;
pub mod door;
pub mod ease;
pub mod stairs;
pub mod tap;
pub mod tiers;
pub mod trigger;
pub mod walk;
pub mod wrap;
