//! Sprite sheet drawing.

use crate::asset::PendingImage;
use crate::surface::{Rect, Surface};
use glam::Vec2;

/// A grid of equally sized animation cells in one image.
/// Rows are facings, columns are frames of the walk cycle.
pub struct SpriteSheet {
    image: PendingImage,
    cols: u32,
    rows: u32,
    /// Cell size, known once the image has loaded
    frame_size: Option<Vec2>,
}

impl SpriteSheet {
    pub fn new(image: PendingImage, cols: u32, rows: u32) -> Self {
        Self {
            image,
            cols: cols.max(1),
            rows: rows.max(1),
            frame_size: None,
        }
    }

    #[cfg(test)]
    pub fn frame_size(&self) -> Option<Vec2> {
        self.frame_size
    }

    /// Compute the cell size the first time the image reports a non-zero size
    fn update_frame_size(&mut self) -> Option<Vec2> {
        if self.frame_size.is_none() {
            if let Some(image) = self.image.poll() {
                if image.width() > 0 && image.height() > 0 {
                    self.frame_size = Some(Vec2::new(
                        image.width() as f32 / self.cols as f32,
                        image.height() as f32 / self.rows as f32,
                    ));
                }
            }
        }
        self.frame_size
    }

    /// Draw cell (`frame`, `row`) centered on `pos`. No-op until the image is ready.
    pub fn draw(&mut self, surface: &mut dyn Surface, frame: usize, row: usize, pos: Vec2) {
        let Some(cell) = self.update_frame_size() else {
            return;
        };
        let Some(image) = self.image.poll() else {
            return;
        };

        let src = Rect::new(frame as f32 * cell.x, row as f32 * cell.y, cell.x, cell.y);
        surface.draw_image(image, src, Rect::centered_at(pos, cell));
    }
}
