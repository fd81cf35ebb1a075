use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Lowest opacity a brush can have
pub const MIN_BRUSH_ALPHA: f32 = 0.05;
/// Highest opacity a brush can have
pub const MAX_BRUSH_ALPHA: f32 = 1.0;
/// Step used by the opacity shortcuts
pub const ALPHA_STEP: f32 = 0.05;

/// Clamp an alpha value into the brush opacity range.
///
/// Used by both the colour picker and the opacity shortcuts.
pub fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        return MAX_BRUSH_ALPHA;
    }
    alpha.clamp(MIN_BRUSH_ALPHA, MAX_BRUSH_ALPHA)
}

/// An sRGB colour with an unmultiplied, fractional alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::new(90, 90, 255, 1.0)
    }
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha, unclamped
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Same colour with alpha forced into the brush range
    pub fn clamped(self) -> Self {
        self.with_alpha(clamp_alpha(self.a))
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_color32(self) -> Color32 {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, a)
    }
}
