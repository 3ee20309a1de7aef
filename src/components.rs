use glam::Vec2;

/// Eight-way facing. The discriminant is the row in the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir8 {
    Down = 0,
    DownLeft = 1,
    Left = 2,
    UpLeft = 3,
    Up = 4,
    UpRight = 5,
    Right = 6,
    DownRight = 7,
}

impl Dir8 {
    #[cfg(test)]
    pub const ALL: [Dir8; 8] = [
        Dir8::Down,
        Dir8::DownLeft,
        Dir8::Left,
        Dir8::UpLeft,
        Dir8::Up,
        Dir8::UpRight,
        Dir8::Right,
        Dir8::DownRight,
    ];

    /// Sheet row for this facing
    pub fn row(self) -> usize {
        self as usize
    }
}

/// Horizontal facing of the platformer figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Platformer movement tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTunables {
    pub move_speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for JumpTunables {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            move_speed: PLAYER_MOVE_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            gravity: PLAYER_GRAVITY,
            max_fall_speed: PLAYER_MAX_FALL_SPEED,
        }
    }
}

/// Axis-aligned body: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}
