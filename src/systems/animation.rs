//! Facing selection and walk-cycle frame timing.

use crate::components::Dir8;
use glam::Vec2;

/// Pick the 8-way facing for a movement intent.
/// A pure axis direction only wins when the other axis is exactly zero.
/// Zero intent faces down.
pub fn facing_from_intent(intent: Vec2) -> Dir8 {
    let (mx, my) = (intent.x, intent.y);
    if mx == 0.0 && my > 0.0 {
        Dir8::Down
    } else if mx == 0.0 && my < 0.0 {
        Dir8::Up
    } else if mx < 0.0 && my == 0.0 {
        Dir8::Left
    } else if mx > 0.0 && my == 0.0 {
        Dir8::Right
    } else if mx < 0.0 && my > 0.0 {
        Dir8::DownLeft
    } else if mx > 0.0 && my > 0.0 {
        Dir8::DownRight
    } else if mx < 0.0 && my < 0.0 {
        Dir8::UpLeft
    } else if mx > 0.0 && my < 0.0 {
        Dir8::UpRight
    } else {
        Dir8::Down
    }
}

/// Fixed-rate frame counter for a looping walk cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkAnimation {
    frame: usize,
    timer: f32,
    fps: f32,
    frame_count: usize,
}

impl WalkAnimation {
    pub fn new(fps: f32, frame_count: usize) -> Self {
        Self {
            frame: 0,
            timer: 0.0,
            fps,
            frame_count: frame_count.max(1),
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    #[cfg(test)]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Advance the cycle by `dt` seconds while moving; idle snaps back to frame 0.
    ///
    /// At most one frame per call. One period is consumed from the timer and
    /// the rest is carried into the next tick.
    pub fn advance(&mut self, dt: f32, moving: bool) {
        if !moving {
            self.frame = 0;
            return;
        }

        let step = 1.0 / self.fps;
        self.timer += dt;
        if self.timer >= step {
            self.timer -= step;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }
}
