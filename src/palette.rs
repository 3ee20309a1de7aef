//! Demo color palette.

use egui::Color32;

// Top-down walker
pub const TOPDOWN_BACKGROUND: Color32 = Color32::from_rgb(0x33, 0x44, 0x55);

// Platformer figure
pub const FIGURE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 115);
pub const BODY_TOP: Color32 = Color32::from_rgb(0xff, 0xd1, 0x66);
pub const BODY_BOTTOM: Color32 = Color32::from_rgb(0xfc, 0xa3, 0x11);
pub const BODY_OUTLINE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 140);
pub const FACE: Color32 = Color32::from_rgb(0xff, 0xe6, 0xc7);
pub const FACE_OUTLINE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 115);
pub const EYE: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const LABEL_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 140);
pub const LABEL: Color32 = Color32::from_rgb(0xf8, 0xf8, 0xf8);

// Platformer scenery
pub const SKY_TOP: Color32 = Color32::from_rgb(0x1d, 0x2b, 0x53);
pub const SKY_BOTTOM: Color32 = Color32::from_rgb(0x7e, 0xb6, 0xd9);
pub const HILLS: Color32 = Color32::from_rgb(0x3b, 0x6e, 0x4f);
pub const CLOUD: Color32 = Color32::from_rgba_premultiplied(225, 225, 225, 225);
pub const GROUND_TOP: Color32 = Color32::from_rgb(0x5a, 0x3e, 0x2b);
pub const GROUND_BOTTOM: Color32 = Color32::from_rgb(0x2e, 0x1f, 0x15);
pub const GROUND_EDGE: Color32 = Color32::from_rgb(0x6a, 0xb0, 0x4c);
pub const GRASS: Color32 = Color32::from_rgb(0x4f, 0x91, 0x3a);

/// Linear blend between two colors, `t` in `[0, 1]`
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        assert_eq!(lerp_color(BODY_TOP, BODY_BOTTOM, 0.0), BODY_TOP);
        assert_eq!(lerp_color(BODY_TOP, BODY_BOTTOM, 1.0), BODY_BOTTOM);
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let mid = lerp_color(Color32::BLACK, Color32::WHITE, 0.5);
        assert_eq!(mid.r(), 128);
        assert_eq!(mid.a(), 255);
    }
}
