//! Top-down movement intent.

use crate::input::HeldDirections;
use glam::Vec2;
use std::f32::consts::FRAC_1_SQRT_2;

/// Movement intent from held directions: -1/0/+1 per axis (screen y grows
/// downward), scaled by 1/√2 on diagonals so every direction has unit length.
pub fn movement_intent(dirs: HeldDirections) -> Vec2 {
    let mut intent = Vec2::ZERO;
    if dirs.left {
        intent.x -= 1.0;
    }
    if dirs.right {
        intent.x += 1.0;
    }
    if dirs.up {
        intent.y -= 1.0;
    }
    if dirs.down {
        intent.y += 1.0;
    }

    if intent.x != 0.0 && intent.y != 0.0 {
        intent *= FRAC_1_SQRT_2;
    }
    intent
}
