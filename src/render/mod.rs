//! egui-backed drawing surface.
//!
//! Scenes paint onto the background layer of the egui context; egui_glow then
//! tessellates and uploads everything in one pass at the end of the frame.

use crate::asset::SpriteImage;
use crate::palette;
use crate::surface::{Fill, Rect, Surface, TextAnchor, TransformStack};

use egui::{Align2, Color32, ColorImage, FontId, Mesh, Painter, Pos2, Shape, Stroke, TextureHandle, TextureId, TextureOptions};
use glam::Vec2;
use std::collections::HashMap;

/// Segments per quarter circle when a rounded rect has to be built by hand
const CORNER_SEGMENTS: usize = 6;
/// Outline points of a filled ellipse
const ELLIPSE_SEGMENTS: usize = 32;

/// GPU textures for sprite images, keyed by image key.
///
/// Uploaded the first time an image is drawn and kept for the life of the
/// window.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn texture_for(&mut self, ctx: &egui::Context, image: &SpriteImage) -> TextureId {
        if let Some(handle) = self.textures.get(image.key()) {
            return handle.id();
        }

        puffin::profile_scope!("upload_texture");
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, image.pixels().as_raw());
        // Pixel art: no filtering between texels
        let handle = ctx.load_texture(image.key(), color_image, TextureOptions::NEAREST);
        log::debug!("uploaded texture {} ({}x{})", image.key(), size[0], size[1]);

        let id = handle.id();
        self.textures.insert(image.key().to_string(), handle);
        id
    }
}

/// [`Surface`] over an egui background layer painter
pub struct EguiSurface<'a> {
    ctx: &'a egui::Context,
    painter: Painter,
    textures: &'a mut TextureCache,
    transform: TransformStack,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ctx: &'a egui::Context, textures: &'a mut TextureCache) -> Self {
        Self {
            ctx,
            painter: ctx.layer_painter(egui::LayerId::background()),
            textures,
            transform: TransformStack::new(),
        }
    }

    fn pos(&self, point: Vec2) -> Pos2 {
        let p = self.transform.apply(point);
        egui::pos2(p.x, p.y)
    }

    fn rect(&self, rect: Rect) -> egui::Rect {
        let r = self.transform.apply_rect(rect);
        egui::Rect::from_min_size(egui::pos2(r.min.x, r.min.y), egui::vec2(r.size.x, r.size.y))
    }

    /// Fan-triangulated gradient over a convex outline
    fn gradient_shape(&self, outline: &[Vec2], top: Color32, bottom: Color32, rect: Rect) -> Shape {
        let color_at = |y: f32| {
            let t = if rect.size.y > 0.0 { (y - rect.min.y) / rect.size.y } else { 0.0 };
            palette::lerp_color(top, bottom, t)
        };

        let mut mesh = Mesh::default();
        let center = rect.center();
        mesh.colored_vertex(self.pos(center), color_at(center.y));
        for &point in outline {
            mesh.colored_vertex(self.pos(point), color_at(point.y));
        }
        let n = outline.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        Shape::mesh(mesh)
    }
}

/// Clockwise outline of a rounded rectangle, starting at the top-left arc.
///
/// The radius is clamped to half the shorter side. A zero radius yields the
/// four corners.
pub fn rounded_outline(rect: Rect, radius: f32) -> Vec<Vec2> {
    let radius = radius.clamp(0.0, rect.size.x.min(rect.size.y) * 0.5);
    let min = rect.min;
    let max = rect.max();
    if radius <= 0.0 {
        return vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
    }

    use std::f32::consts::{FRAC_PI_2, PI};
    let corners = [
        (Vec2::new(min.x + radius, min.y + radius), PI),
        (Vec2::new(max.x - radius, min.y + radius), PI + FRAC_PI_2),
        (Vec2::new(max.x - radius, max.y - radius), 0.0),
        (Vec2::new(min.x + radius, max.y - radius), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
            points.push(center + Vec2::new(angle.cos(), angle.sin()) * radius);
        }
    }
    points
}

fn align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::CenterBottom => Align2::CENTER_BOTTOM,
    }
}

impl Surface for EguiSurface<'_> {
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
        let size = self.ctx.screen_rect().size();
        Vec2::new(size.x, size.y)
    }

    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.ctx.screen_rect(), 0.0, color);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        self.fill_rounded_rect(rect, 0.0, fill);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Fill) {
        match fill {
            Fill::Solid(color) => {
                self.painter.rect_filled(self.rect(rect), radius, color);
            }
            Fill::VerticalGradient { top, bottom } => {
                let outline = rounded_outline(rect, radius);
                let shape = self.gradient_shape(&outline, top, bottom, rect);
                self.painter.add(shape);
            }
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color32) {
        self.painter
            .rect_stroke(self.rect(rect), radius, Stroke::new(width, color));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color32) {
        let points = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                self.pos(center + Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y))
            })
            .collect();
        self.painter
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.pos(center), radius, color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.pos(center), radius, Stroke::new(width, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().map(|&p| self.pos(p)).collect();
        self.painter
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn draw_image(&mut self, image: &SpriteImage, src: Rect, dst: Rect) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let texture = self.textures.texture_for(self.ctx, image);
        let size = Vec2::new(image.width() as f32, image.height() as f32);
        let uv_min = src.min / size;
        let uv_max = src.max() / size;
        let uv = egui::Rect::from_min_max(egui::pos2(uv_min.x, uv_min.y), egui::pos2(uv_max.x, uv_max.y));
        self.painter
            .image(texture, self.rect(dst), uv, Color32::WHITE);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, anchor: TextAnchor, color: Color32) {
        self.painter.text(
            self.pos(pos),
            align(anchor),
            text,
            FontId::proportional(size),
            color,
        );
    }
}
