//! Tuning constants, one submodule per demo concern.

mod animation;
mod camera;
mod platformer;
mod time;
mod topdown;
mod ui;

pub use animation::*;
pub use camera::*;
pub use platformer::*;
pub use time::*;
pub use topdown::*;
pub use ui::*;
