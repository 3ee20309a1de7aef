//! Single-axis gravity, ground clamp and horizontal world bounds.

use crate::components::Body;

/// Accelerate downward, capped at `max_fall_speed`
pub fn apply_gravity(body: &mut Body, gravity: f32, max_fall_speed: f32, dt: f32) {
    body.vel.y += gravity * dt;
    if body.vel.y > max_fall_speed {
        body.vel.y = max_fall_speed;
    }
}

pub fn integrate(body: &mut Body, dt: f32) {
    body.pos += body.vel * dt;
}

/// Snap the body onto the ground line if its bottom edge reached it.
/// Returns the new ground-contact state.
pub fn resolve_ground(body: &mut Body, ground_y: f32) -> bool {
    if body.bottom() >= ground_y {
        body.pos.y = ground_y - body.size.y;
        body.vel.y = 0.0;
        true
    } else {
        false
    }
}

/// Keep the body inside `[0, world_width - width]`
pub fn clamp_to_world(body: &mut Body, world_width: f32) {
    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
    }
    if body.pos.x + body.size.x > world_width {
        body.pos.x = world_width - body.size.x;
    }
}
