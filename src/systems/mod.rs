//! Per-tick systems shared by the demo entities.
//!
//! - `animation`: 8-way facing selection and walk-cycle timing
//! - `movement`: top-down movement intent with diagonal normalization
//! - `physics`: gravity, ground clamp and world bounds

pub mod animation;
pub mod movement;
pub mod physics;

pub use animation::{facing_from_intent, WalkAnimation};
pub use movement::movement_intent;
