//! Capability set shared by the demo entities.

use crate::surface::Surface;
use glam::Vec2;

/// Something the frame loop can step and draw.
///
/// Each demo feeds its entity a different per-tick control value: the
/// top-down walker reads held directions, the platformer body reads the world
/// it is confined to.
pub trait SimEntity {
    type Control;

    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn update(&mut self, dt: f32, control: &Self::Control);
    /// Draw in world coordinates; the caller applies any camera translation
    fn draw(&mut self, surface: &mut dyn Surface);
}
