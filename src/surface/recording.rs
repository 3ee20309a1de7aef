//! Surface that records draw calls in device coordinates (tests only).

use super::{Fill, Rect, Surface, TextAnchor, TransformStack};
use crate::asset::SpriteImage;
use egui::Color32;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    Rect { rect: Rect, fill: Fill },
    RoundedRect { rect: Rect, radius: f32, fill: Fill },
    RoundedRectStroke { rect: Rect, radius: f32, width: f32, color: Color32 },
    Ellipse { center: Vec2, radii: Vec2, color: Color32 },
    Circle { center: Vec2, radius: f32, color: Color32 },
    CircleStroke { center: Vec2, radius: f32, width: f32, color: Color32 },
    Polygon { points: Vec<Vec2>, color: Color32 },
    Image { key: String, src: Rect, dst: Rect },
    Text { text: String, pos: Vec2, size: f32, anchor: TextAnchor, color: Color32 },
}

pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    transform: TransformStack,
    viewport: Vec2,
}

impl RecordingSurface {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            commands: Vec::new(),
            transform: TransformStack::new(),
            viewport,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.transform.offset()
    }

    pub fn images(&self) -> Vec<(Rect, Rect)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image { src, dst, .. } => Some((*src, *dst)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Vec2, Color32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, pos, color, .. } => Some((text.clone(), *pos, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.transform.save();
    }

    fn restore(&mut self) {
        self.transform.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform.translate(offset);
    }

    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn clear(&mut self, color: Color32) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        let rect = self.transform.apply_rect(rect);
        self.commands.push(DrawCommand::Rect { rect, fill });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Fill) {
        let rect = self.transform.apply_rect(rect);
        self.commands.push(DrawCommand::RoundedRect { rect, radius, fill });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color32) {
        let rect = self.transform.apply_rect(rect);
        self.commands.push(DrawCommand::RoundedRectStroke { rect, radius, width, color });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color32) {
        let center = self.transform.apply(center);
        self.commands.push(DrawCommand::Ellipse { center, radii, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32) {
        let center = self.transform.apply(center);
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color32) {
        let center = self.transform.apply(center);
        self.commands.push(DrawCommand::CircleStroke { center, radius, width, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color32) {
        let points = points.iter().map(|&p| self.transform.apply(p)).collect();
        self.commands.push(DrawCommand::Polygon { points, color });
    }

    fn draw_image(&mut self, image: &SpriteImage, src: Rect, dst: Rect) {
        let dst = self.transform.apply_rect(dst);
        self.commands.push(DrawCommand::Image {
            key: image.key().to_string(),
            src,
            dst,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, anchor: TextAnchor, color: Color32) {
        let pos = self.transform.apply(pos);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            anchor,
            color,
        });
    }
}
