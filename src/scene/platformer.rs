//! Side-scrolling platformer scene with camera follow.

use super::Scene;
use crate::backdrop::Backdrop;
use crate::camera::Camera;
use crate::constants::*;
use crate::entity::SimEntity;
use crate::input::InputState;
use crate::palette;
use crate::player::Jumper;
use crate::surface::{Fill, Rect, Surface};
use crate::world::World;
use glam::Vec2;

pub struct PlatformerScene {
    world: World,
    backdrop: Backdrop,
    player: Jumper,
    camera: Camera,
}

impl PlatformerScene {
    pub fn new(viewport: Vec2, nickname: &str) -> Self {
        Self::with_world(World::default(), viewport, nickname)
    }

    pub fn with_world(world: World, viewport: Vec2, nickname: &str) -> Self {
        let spawn = Vec2::new(
            PLAYER_SPAWN_X,
            world.ground_y() - PLAYER_HEIGHT - PLAYER_SPAWN_DROP,
        );
        Self {
            backdrop: Backdrop::generate(&world, BACKDROP_SEED),
            player: Jumper::new(spawn, nickname),
            camera: Camera::new(viewport.x, viewport.y),
            world,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Jumper {
        &self.player
    }

    #[cfg(test)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// Turn held keys into move commands. The last horizontal command wins;
/// jump is re-issued every tick the key is held.
fn apply_controls(player: &mut Jumper, input: &InputState) {
    let dirs = input.directions();
    player.stop_horizontal();
    if dirs.left {
        player.move_left();
    }
    if dirs.right {
        player.move_right();
    }
    if input.jump_held() {
        player.jump();
    }
}

impl Scene for PlatformerScene {
    fn title(&self) -> &'static str {
        "Platformer"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        apply_controls(&mut self.player, input);
        self.player.update(dt, &self.world);
        log::trace!(
            "jumper pos={} vel={} on_ground={}",
            self.player.position(),
            self.player.velocity(),
            self.player.on_ground
        );
        self.camera
            .follow(self.player.body.center().x, self.world.width());
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let viewport = surface.viewport();

        // Screen-space sky
        surface.clear(palette::SKY_BOTTOM);
        surface.fill_rect(
            Rect::from_min_size(Vec2::ZERO, viewport),
            Fill::VerticalGradient {
                top: palette::SKY_TOP,
                bottom: palette::SKY_BOTTOM,
            },
        );

        surface.save();
        surface.translate(self.camera.offset());
        self.backdrop
            .draw(surface, &self.world, self.camera.visible_range());
        self.player.draw(surface);
        surface.restore();
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCommand, RecordingSurface};
    use winit::keyboard::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> PlatformerScene {
        PlatformerScene::new(Vec2::new(800.0, 720.0), "runner")
    }

    fn settle(scene: &mut PlatformerScene) {
        let input = InputState::new();
        for _ in 0..120 {
            scene.update(DT, &input);
        }
        assert!(scene.player().on_ground);
    }

    #[test]
    fn test_player_drops_onto_ground() {
        let mut scene = scene();
        assert!(!scene.player().on_ground);
        settle(&mut scene);
        assert_eq!(scene.player().body.bottom(), WORLD_GROUND_Y);
    }

    #[test]
    fn test_running_right_scrolls_camera() {
        let mut scene = scene();
        settle(&mut scene);
        let mut input = InputState::new();
        input.press(KeyCode::ArrowRight);
        for _ in 0..600 {
            scene.update(DT, &input);
        }
        assert!(scene.player().body.pos.x > 1000.0);
        assert!(scene.camera().position.x > 0.0);
        let max_x = WORLD_WIDTH - 800.0;
        assert!(scene.camera().position.x <= max_x);
    }

    #[test]
    fn test_both_directions_last_command_wins() {
        let mut scene = scene();
        let mut input = InputState::new();
        input.press(KeyCode::ArrowLeft);
        input.press(KeyCode::ArrowRight);
        scene.update(DT, &input);
        assert_eq!(scene.player().body.vel.x, PLAYER_MOVE_SPEED);
    }

    #[test]
    fn test_release_stops_horizontal() {
        let mut scene = scene();
        let mut input = InputState::new();
        input.press(KeyCode::KeyA);
        scene.update(DT, &input);
        input.release(KeyCode::KeyA);
        scene.update(DT, &input);
        assert_eq!(scene.player().body.vel.x, 0.0);
    }

    #[test]
    fn test_held_jump_jumps_once() {
        let mut scene = scene();
        settle(&mut scene);
        let mut input = InputState::new();
        input.press(KeyCode::Space);
        scene.update(DT, &input);
        assert!(scene.player().body.vel.y < 0.0);

        // Half a second in: still rising or falling from the single impulse
        let mut previous_vy = scene.player().body.vel.y;
        for _ in 0..30 {
            scene.update(DT, &input);
            assert!(!scene.player().on_ground);
            assert!(scene.player().body.vel.y > previous_vy);
            previous_vy = scene.player().body.vel.y;
        }
    }

    #[test]
    fn test_world_content_drawn_through_camera() {
        let mut scene = scene();
        settle(&mut scene);
        let mut input = InputState::new();
        input.press(KeyCode::KeyD);
        for _ in 0..400 {
            scene.update(DT, &input);
        }
        let camera_x = scene.camera().position.x;
        assert!(camera_x > 0.0);

        let mut surface = RecordingSurface::new(Vec2::new(800.0, 720.0));
        scene.render(&mut surface);

        // Sky is screen space
        assert!(matches!(
            surface.commands[1],
            DrawCommand::Rect { rect, .. } if rect.min == Vec2::ZERO
        ));

        // Player body lands at its world position minus the camera offset
        let body = surface
            .commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::RoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        let expected = scene.player().body.pos.x - camera_x;
        assert!((body.min.x - expected).abs() < 1e-3);

        // Transform does not leak past the frame
        assert_eq!(surface.offset(), Vec2::ZERO);
    }
}
