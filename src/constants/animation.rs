//! Animation-related constants.

/// Columns in a walk cycle row of the character sheet
pub const WALK_FRAME_COUNT: usize = 4;
/// Walk cycle playback rate (frames per second)
pub const WALK_FPS: f32 = 8.0;
