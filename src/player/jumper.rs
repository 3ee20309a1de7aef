//! Side-scrolling platformer body with a procedurally drawn figure.

use crate::components::{Body, Facing, JumpTunables};
use crate::constants::*;
use crate::entity::SimEntity;
use crate::palette;
use crate::surface::{Fill, Rect, Surface, TextAnchor};
use crate::systems::physics;
use crate::world::World;
use glam::Vec2;

pub struct Jumper {
    pub body: Body,
    pub tunables: JumpTunables,
    pub on_ground: bool,
    pub facing: Facing,
    pub nickname: String,
}

impl Jumper {
    /// Player with the default size and tunables. `pos` is the top-left corner.
    pub fn new(pos: Vec2, nickname: impl Into<String>) -> Self {
        Self::with_tunables(pos, JumpTunables::default(), nickname)
    }

    pub fn with_tunables(pos: Vec2, tunables: JumpTunables, nickname: impl Into<String>) -> Self {
        let nickname = nickname.into();
        let nickname = if nickname.trim().is_empty() {
            DEFAULT_NICKNAME.to_string()
        } else {
            nickname
        };

        Self {
            body: Body::new(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            tunables,
            on_ground: false,
            facing: Facing::Right,
            nickname,
        }
    }

    pub fn move_left(&mut self) {
        self.body.vel.x = -self.tunables.move_speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.body.vel.x = self.tunables.move_speed;
        self.facing = Facing::Right;
    }

    pub fn stop_horizontal(&mut self) {
        self.body.vel.x = 0.0;
    }

    /// Jump only from the ground. Leaving the ground clears the contact flag,
    /// so holding the key cannot jump again mid-air.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.body.vel.y = -self.tunables.jump_power;
            self.on_ground = false;
        }
    }

    pub fn apply_physics(&mut self, dt: f32, ground_y: f32, world_width: f32) {
        physics::apply_gravity(
            &mut self.body,
            self.tunables.gravity,
            self.tunables.max_fall_speed,
            dt,
        );
        physics::integrate(&mut self.body, dt);
        self.on_ground = physics::resolve_ground(&mut self.body, ground_y);
        physics::clamp_to_world(&mut self.body, world_width);
    }

    fn draw_figure(&self, surface: &mut dyn Surface) {
        let Vec2 { x, y } = self.body.pos;
        let Vec2 { x: w, y: h } = self.body.size;

        surface.fill_ellipse(
            Vec2::new(x + w / 2.0, y + h + SHADOW_OFFSET),
            Vec2::new(w * 0.45, SHADOW_RADIUS_Y),
            palette::FIGURE_SHADOW,
        );

        let body = Rect::new(x, y, w, h);
        surface.fill_rounded_rect(
            body,
            BODY_CORNER_RADIUS,
            Fill::VerticalGradient {
                top: palette::BODY_TOP,
                bottom: palette::BODY_BOTTOM,
            },
        );
        surface.stroke_rounded_rect(body, BODY_CORNER_RADIUS, 2.0, palette::BODY_OUTLINE);

        let face = Vec2::new(x + w / 2.0, y + h * 0.28);
        surface.fill_circle(face, FACE_RADIUS, palette::FACE);
        surface.stroke_circle(face, FACE_RADIUS, 1.0, palette::FACE_OUTLINE);

        let eye = face + Vec2::new(EYE_OFFSET * self.facing.sign(), -1.0);
        surface.fill_circle(eye, EYE_RADIUS, palette::EYE);

        // Label: dark pass offset by one pixel, then the light pass on top
        let label = Vec2::new(x + w / 2.0, y - NICKNAME_GAP);
        surface.fill_text(
            &self.nickname,
            label + Vec2::ONE,
            NICKNAME_FONT_SIZE,
            TextAnchor::CenterBottom,
            palette::LABEL_SHADOW,
        );
        surface.fill_text(
            &self.nickname,
            label,
            NICKNAME_FONT_SIZE,
            TextAnchor::CenterBottom,
            palette::LABEL,
        );
    }
}

impl SimEntity for Jumper {
    type Control = World;

    fn position(&self) -> Vec2 {
        self.body.pos
    }

    fn velocity(&self) -> Vec2 {
        self.body.vel
    }

    fn update(&mut self, dt: f32, world: &World) {
        self.apply_physics(dt, world.ground_y(), world.width());
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.draw_figure(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCommand, RecordingSurface};

    const DT: f32 = 1.0 / 60.0;

    fn grounded(x: f32) -> Jumper {
        let mut p = Jumper::new(Vec2::new(x, 500.0 - PLAYER_HEIGHT), "tester");
        p.apply_physics(DT, 500.0, 3000.0);
        assert!(p.on_ground);
        p
    }

    #[test]
    fn test_lands_exactly_on_ground() {
        let mut p = Jumper::new(Vec2::new(100.0, 200.0), "tester");
        p.body.vel.y = 300.0;
        for _ in 0..600 {
            p.apply_physics(DT, 500.0, 3000.0);
            if p.on_ground {
                break;
            }
        }
        assert!(p.on_ground);
        assert_eq!(p.body.bottom(), 500.0);
        assert_eq!(p.body.vel.y, 0.0);
    }

    #[test]
    fn test_drop_scenario_settles_without_tunneling() {
        // Body at (100, groundY - 100), vy = 0, groundY = 500
        let mut p = Jumper::new(Vec2::new(100.0, 400.0), "tester");
        let mut previous_y = p.body.pos.y;
        for tick in 0..240 {
            p.apply_physics(DT, 500.0, 3000.0);
            assert!(p.body.bottom() <= 500.0, "tunneled at tick {tick}");
            assert!(p.body.pos.y >= previous_y, "moved up while falling at tick {tick}");
            assert!(p.body.vel.y <= 900.0);
            previous_y = p.body.pos.y;
        }
        assert!(p.on_ground);
        assert_eq!(p.body.pos.y, 500.0 - PLAYER_HEIGHT);
        assert_eq!(p.body.vel.y, 0.0);
    }

    #[test]
    fn test_ground_contact_rechecked_every_tick() {
        let mut p = grounded(100.0);
        p.jump();
        p.apply_physics(DT, 500.0, 3000.0);
        assert!(!p.on_ground);
        assert!(p.body.bottom() < 500.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut p = grounded(100.0);
        p.jump();
        assert_eq!(p.body.vel.y, -PLAYER_JUMP_POWER);
        assert!(!p.on_ground);
    }

    #[test]
    fn test_jump_in_air_is_noop() {
        let mut p = Jumper::new(Vec2::new(100.0, 100.0), "tester");
        p.body.vel = Vec2::new(260.0, 120.0);
        p.jump();
        assert_eq!(p.body.vel, Vec2::new(260.0, 120.0));
    }

    #[test]
    fn test_no_double_jump_while_held() {
        let mut p = grounded(100.0);
        p.jump();
        for _ in 0..10 {
            p.apply_physics(DT, 500.0, 3000.0);
            let vy = p.body.vel.y;
            p.jump();
            assert_eq!(p.body.vel.y, vy);
        }
    }

    #[test]
    fn test_move_commands_set_velocity_and_facing() {
        let mut p = grounded(100.0);
        p.move_left();
        assert_eq!(p.body.vel.x, -PLAYER_MOVE_SPEED);
        assert_eq!(p.facing, Facing::Left);
        p.move_right();
        assert_eq!(p.body.vel.x, PLAYER_MOVE_SPEED);
        assert_eq!(p.facing, Facing::Right);
        p.stop_horizontal();
        assert_eq!(p.body.vel.x, 0.0);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_clamped_inside_world() {
        let mut p = grounded(5.0);
        p.body.vel.x = -1_000_000.0;
        p.apply_physics(DT, 500.0, 3000.0);
        assert_eq!(p.body.pos.x, 0.0);

        p.body.vel.x = 1_000_000.0;
        p.apply_physics(DT, 500.0, 3000.0);
        assert_eq!(p.body.pos.x, 3000.0 - PLAYER_WIDTH);
    }

    #[test]
    fn test_blank_nickname_defaults() {
        let p = Jumper::new(Vec2::ZERO, "   ");
        assert_eq!(p.nickname, DEFAULT_NICKNAME);
    }

    #[test]
    fn test_eye_follows_facing() {
        let mut p = grounded(100.0);
        let eye_x = |p: &mut Jumper| {
            let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));
            p.draw(&mut surface);
            surface
                .commands
                .iter()
                .rev()
                .find_map(|cmd| match cmd {
                    DrawCommand::Circle { center, radius, .. } if *radius == EYE_RADIUS => Some(center.x),
                    _ => None,
                })
                .unwrap()
        };
        let face_x = p.body.pos.x + PLAYER_WIDTH / 2.0;

        p.move_right();
        assert_eq!(eye_x(&mut p), face_x + EYE_OFFSET);
        p.move_left();
        assert_eq!(eye_x(&mut p), face_x - EYE_OFFSET);
    }

    #[test]
    fn test_label_drawn_shadow_then_fill() {
        let mut p = grounded(100.0);
        let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));
        p.draw(&mut surface);

        let texts = surface.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "tester");
        assert_eq!(texts[0].2, palette::LABEL_SHADOW);
        assert_eq!(texts[1].2, palette::LABEL);
        assert_eq!(texts[0].1 - texts[1].1, Vec2::ONE);
        assert_eq!(texts[1].1.y, p.body.pos.y - NICKNAME_GAP);
    }

    #[test]
    fn test_shadow_sits_below_feet() {
        let mut p = grounded(100.0);
        let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));
        p.draw(&mut surface);

        let DrawCommand::Ellipse { center, radii, color } = surface.commands[0] else {
            panic!("shadow should be drawn first");
        };
        assert_eq!(color, palette::FIGURE_SHADOW);
        assert_eq!(center.y, p.body.bottom() + SHADOW_OFFSET);
        assert_eq!(radii, Vec2::new(PLAYER_WIDTH * 0.45, SHADOW_RADIUS_Y));
    }
}
