//! Static platformer scenery: noise hills, scattered clouds, ground and grass.
//!
//! Generated once from a seed and drawn in world space, culled to the
//! camera's visible span.

use crate::constants::*;
use crate::palette;
use crate::surface::{Fill, Rect, Surface};
use crate::world::World;
use glam::Vec2;
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub center: Vec2,
    pub radii: Vec2,
}

pub struct Backdrop {
    /// Hill silhouette tops, left to right
    hill_tops: Vec<Vec2>,
    clouds: Vec<Cloud>,
    /// Grass tuft x positions along the ground line
    grass: Vec<f32>,
}

impl Backdrop {
    pub fn generate(world: &World, seed: u64) -> Self {
        let perlin = Perlin::new(seed as u32);
        let ground = world.ground_y();

        let samples = (world.width() / HILL_SAMPLE_SPACING).ceil() as usize;
        let hill_tops = (0..=samples)
            .map(|i| {
                let x = (i as f32 * HILL_SAMPLE_SPACING).min(world.width());
                // Perlin is zero on integer lattice points; sample between rows
                let n = perlin.get([x as f64 * HILL_NOISE_SCALE, 0.5]) as f32;
                let height = (n * 0.5 + 0.5).clamp(0.0, 1.0) * HILL_MAX_HEIGHT;
                Vec2::new(x, ground - height)
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let sky_limit = (ground * 0.4).max(60.0);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                center: Vec2::new(
                    rng.gen_range(0.0..world.width()),
                    rng.gen_range(40.0..sky_limit),
                ),
                radii: Vec2::new(rng.gen_range(40.0..90.0), rng.gen_range(14.0..26.0)),
            })
            .collect();

        let tufts = (world.width() / GRASS_SPACING) as usize;
        let grass = (0..tufts)
            .map(|i| {
                let jitter = rng.gen_range(-GRASS_SPACING * 0.3..GRASS_SPACING * 0.3);
                (i as f32 * GRASS_SPACING + jitter).clamp(0.0, world.width())
            })
            .collect();

        Self {
            hill_tops,
            clouds,
            grass,
        }
    }

    #[cfg(test)]
    pub fn hill_tops(&self) -> &[Vec2] {
        &self.hill_tops
    }

    #[cfg(test)]
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Draw the scenery overlapping `[visible.0, visible.1]` on the x axis
    pub fn draw(&self, surface: &mut dyn Surface, world: &World, visible: (f32, f32)) {
        let (left, right) = visible;
        let ground = world.ground_y();

        for cloud in &self.clouds {
            if cloud.center.x + cloud.radii.x < left || cloud.center.x - cloud.radii.x > right {
                continue;
            }
            surface.fill_ellipse(cloud.center, cloud.radii, palette::CLOUD);
            surface.fill_ellipse(
                cloud.center + Vec2::new(cloud.radii.x * 0.4, -cloud.radii.y * 0.5),
                cloud.radii * 0.6,
                palette::CLOUD,
            );
        }

        for pair in self.hill_tops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.x < left || a.x > right {
                continue;
            }
            surface.fill_polygon(
                &[a, b, Vec2::new(b.x, ground), Vec2::new(a.x, ground)],
                palette::HILLS,
            );
        }

        let strip_left = left.max(0.0);
        let strip_right = right.min(world.width());
        if strip_right > strip_left {
            let width = strip_right - strip_left;
            surface.fill_rect(
                Rect::new(strip_left, ground, width, world.height() - ground),
                Fill::VerticalGradient {
                    top: palette::GROUND_TOP,
                    bottom: palette::GROUND_BOTTOM,
                },
            );
            surface.fill_rect(
                Rect::new(strip_left, ground, width, 4.0),
                Fill::Solid(palette::GROUND_EDGE),
            );
        }

        for &x in &self.grass {
            if x < left - 8.0 || x > right + 8.0 {
                continue;
            }
            surface.fill_polygon(
                &[
                    Vec2::new(x - 4.0, ground),
                    Vec2::new(x, ground - 9.0),
                    Vec2::new(x + 4.0, ground),
                ],
                palette::GRASS,
            );
        }
    }
}
