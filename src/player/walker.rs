//! Top-down 8-direction sprite walker.

use crate::components::Dir8;
use crate::entity::SimEntity;
use crate::input::HeldDirections;
use crate::sprite::SpriteSheet;
use crate::surface::Surface;
use crate::systems::{facing_from_intent, movement_intent, WalkAnimation};
use glam::Vec2;

pub struct Walker {
    /// Sprite center in world coordinates
    pub pos: Vec2,
    pub vel: Vec2,
    speed: f32,
    facing: Dir8,
    anim: WalkAnimation,
    sheet: SpriteSheet,
}

impl Walker {
    pub fn new(pos: Vec2, sheet: SpriteSheet, speed: f32, anim: WalkAnimation) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed,
            facing: Dir8::Down,
            anim,
            sheet,
        }
    }

    #[cfg(test)]
    pub fn facing(&self) -> Dir8 {
        self.facing
    }

    #[cfg(test)]
    pub fn frame(&self) -> usize {
        self.anim.frame()
    }
}

impl SimEntity for Walker {
    type Control = HeldDirections;

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn update(&mut self, dt: f32, dirs: &HeldDirections) {
        let intent = movement_intent(*dirs);
        self.vel = intent * self.speed;
        self.pos += self.vel * dt;

        self.facing = facing_from_intent(intent);
        self.anim.advance(dt, intent != Vec2::ZERO);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.sheet.draw(surface, self.anim.frame(), self.facing.row(), self.pos);
    }
}
