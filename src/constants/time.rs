//! Frame timing constants.

/// Longest step handed to a scene in one tick (seconds).
/// A stalled or backgrounded window would otherwise integrate a huge jump.
pub const MAX_FRAME_DT: f32 = 0.1;
