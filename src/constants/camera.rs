//! Camera-related constants.

/// Per-tick interpolation weight toward the follow target (0 < lerp < 1)
pub const CAMERA_LERP_FACTOR: f32 = 0.12;
