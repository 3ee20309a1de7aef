//! Drawing surface abstraction.
//!
//! Scenes never talk to egui or GL directly. They issue primitive drawing
//! operations against a [`Surface`], which also carries a save/restore/translate
//! stack so world-space content can be drawn through the camera offset without
//! leaking the transform into later screen-space draws.

#[cfg(test)]
pub mod recording;

use crate::asset::SpriteImage;
use egui::Color32;
use glam::Vec2;

/// Axis-aligned rectangle in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            size: self.size,
        }
    }
}

/// How a filled shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color32),
    /// Linear gradient from the shape's top edge to its bottom edge
    VerticalGradient { top: Color32, bottom: Color32 },
}

impl From<Color32> for Fill {
    fn from(color: Color32) -> Self {
        Fill::Solid(color)
    }
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    CenterBottom,
}

/// Primitive drawing operations of the rendering surface.
///
/// All coordinates go through the current translation. `fill_polygon`
/// expects a convex outline.
pub trait Surface {
    fn save(&mut self);
    /// Pop the last saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);

    /// Size of the drawable area in device units
    fn viewport(&self) -> Vec2;

    fn clear(&mut self, color: Color32);
    fn fill_rect(&mut self, rect: Rect, fill: Fill);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Fill);
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color32);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color32);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color32);
    /// Blit the `src` region of `image` (pixels) into `dst`
    fn draw_image(&mut self, image: &SpriteImage, src: Rect, dst: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, anchor: TextAnchor, color: Color32);
}

/// Translation stack shared by the surface backends
#[derive(Debug, Default, Clone)]
pub struct TransformStack {
    offset: Vec2,
    saved: Vec<Vec2>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self) {
        self.saved.push(self.offset);
    }

    pub fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.offset += offset;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        point + self.offset
    }

    pub fn apply_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.offset)
    }
}
