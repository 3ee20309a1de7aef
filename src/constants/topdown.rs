//! Top-down walker constants.

/// Walking speed along an axis (pixels per second)
pub const TOPDOWN_SPEED: f32 = 150.0;
/// Character used for the walker when the manifest names none
pub const TOPDOWN_CHARACTER: &str = "human";
/// Animation used for walking
pub const TOPDOWN_WALK_ANIMATION: &str = "walk";
