//! Demo scenes.
//!
//! A scene owns everything one demo simulates (entity, world, camera) and is
//! driven by the frame loop: `update` once per tick with the held-key
//! snapshot, then `render` onto the drawing surface.

pub mod platformer;
pub mod topdown;

use crate::input::InputState;
use crate::surface::Surface;

pub use platformer::PlatformerScene;
pub use topdown::TopDownScene;

pub trait Scene {
    fn title(&self) -> &'static str;
    fn update(&mut self, dt: f32, input: &InputState);
    fn render(&mut self, surface: &mut dyn Surface);
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// 8-direction sprite walker
    Topdown,
    /// Side-scroller with camera follow
    Platformer,
}
