use crate::constants::*;

/// Fixed-size platformer world. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    width: f32,
    height: f32,
    ground_y: f32,
}

impl World {
    pub fn new(width: f32, height: f32, ground_y: f32) -> Self {
        Self {
            width,
            height,
            ground_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT, WORLD_GROUND_Y)
    }
}
