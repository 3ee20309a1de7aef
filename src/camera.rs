use crate::constants::*;
use glam::Vec2;

/// Viewport offset into world space.
///
/// `position` is the world coordinate of the viewport's top-left corner, so
/// world-space content is drawn translated by `-position`.
pub struct Camera {
    pub position: Vec2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    lerp_factor: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self::with_lerp(viewport_width, viewport_height, CAMERA_LERP_FACTOR)
    }

    pub fn with_lerp(viewport_width: f32, viewport_height: f32, lerp_factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport_width,
            viewport_height,
            lerp_factor,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Ease toward centering `target_center_x`, then clamp to the world.
    /// One call per frame; the vertical offset is left alone.
    pub fn follow(&mut self, target_center_x: f32, world_width: f32) {
        let target_x = target_center_x - self.viewport_width / 2.0;
        self.position.x += (target_x - self.position.x) * self.lerp_factor;

        let max_x = (world_width - self.viewport_width).max(0.0);
        self.position.x = self.position.x.clamp(0.0, max_x);
    }

    /// Translation to apply to world-space draws
    pub fn offset(&self) -> Vec2 {
        -self.position
    }

    /// World-x span currently on screen
    pub fn visible_range(&self) -> (f32, f32) {
        (self.position.x, self.position.x + self.viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_without_overshoot() {
        let mut camera = Camera::new(0.0, 720.0);
        let target = 1000.0;
        let mut ticks = 0;
        while target - camera.position.x > 1.0 {
            let before = camera.position.x;
            camera.follow(target, 10_000.0);
            assert!(camera.position.x > before, "camera must move toward target");
            assert!(camera.position.x <= target, "camera must not overshoot");
            ticks += 1;
            assert!(ticks < 100, "camera did not converge");
        }
        // 0.88^n * 1000 <= 1  =>  n = 55
        assert_eq!(ticks, 55);
    }

    #[test]
    fn test_stationary_target_settles() {
        let mut camera = Camera::new(0.0, 720.0);
        for _ in 0..1000 {
            camera.follow(1000.0, 10_000.0);
        }
        assert!((camera.position.x - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_target_is_centered() {
        let mut camera = Camera::with_lerp(800.0, 600.0, 1.0);
        camera.follow(1500.0, 3000.0);
        assert_eq!(camera.position.x, 1100.0);
    }

    #[test]
    fn test_clamped_to_world_bounds() {
        let mut camera = Camera::with_lerp(800.0, 600.0, 1.0);
        camera.follow(10.0, 3000.0);
        assert_eq!(camera.position.x, 0.0);

        camera.follow(2990.0, 3000.0);
        assert_eq!(camera.position.x, 2200.0);
    }

    #[test]
    fn test_clamp_applies_after_smoothing() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position.x = 2200.0;
        for _ in 0..50 {
            camera.follow(3000.0, 3000.0);
            assert!(camera.position.x >= 0.0 && camera.position.x <= 2200.0);
        }
    }

    #[test]
    fn test_world_narrower_than_viewport_pins_to_origin() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.follow(900.0, 1000.0);
        assert_eq!(camera.position.x, 0.0);
    }

    #[test]
    fn test_vertical_offset_untouched() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.follow(2000.0, 3000.0);
        assert_eq!(camera.position.y, 0.0);
        assert_eq!(camera.offset().y, 0.0);
    }

    #[test]
    fn test_visible_range_follows_position() {
        let mut camera = Camera::with_lerp(800.0, 600.0, 1.0);
        assert_eq!(camera.visible_range(), (0.0, 800.0));
        camera.follow(1500.0, 3000.0);
        assert_eq!(camera.visible_range(), (1100.0, 1900.0));
    }
}
