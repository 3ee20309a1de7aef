//! Top-down walker scene: one sprite on a flat background, no camera.

use super::Scene;
use crate::asset::PendingImage;
use crate::constants::*;
use crate::entity::SimEntity;
use crate::input::InputState;
use crate::manifest::SpriteManifest;
use crate::palette;
use crate::player::Walker;
use crate::sprite::SpriteSheet;
use crate::surface::Surface;
use crate::systems::WalkAnimation;
use glam::Vec2;

pub struct TopDownScene {
    player: Walker,
}

impl TopDownScene {
    /// Start loading the walk sheet named in `manifest` and place the walker
    /// at the viewport center.
    pub fn new(viewport: Vec2, manifest: &SpriteManifest) -> Self {
        let anim = match manifest.animation(TOPDOWN_CHARACTER, TOPDOWN_WALK_ANIMATION) {
            Some(anim) => anim.clone(),
            None => {
                log::warn!(
                    "manifest has no {TOPDOWN_CHARACTER}.{TOPDOWN_WALK_ANIMATION}; using built-in sheet"
                );
                SpriteManifest::builtin_walk()
            }
        };

        let path = manifest.resolve(&anim);
        log::info!("loading walk sheet {}", path.display());
        let sheet = SpriteSheet::new(PendingImage::spawn(path), anim.cols, anim.rows);
        Self::with_sheet(viewport, sheet, WalkAnimation::new(anim.fps, anim.cols as usize))
    }

    pub fn with_sheet(viewport: Vec2, sheet: SpriteSheet, anim: WalkAnimation) -> Self {
        Self {
            player: Walker::new(viewport / 2.0, sheet, TOPDOWN_SPEED, anim),
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Walker {
        &self.player
    }
}

impl Scene for TopDownScene {
    fn title(&self) -> &'static str {
        "Sprite Walker"
    }

    fn update(&mut self, dt: f32, input: &InputState) {
        self.player.update(dt, &input.directions());
        log::trace!(
            "walker pos={} vel={}",
            self.player.position(),
            self.player.velocity()
        );
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        surface.clear(palette::TOPDOWN_BACKGROUND);
        self.player.draw(surface);
    }
}
