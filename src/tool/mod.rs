mod selector;

pub use selector::ToolSelector;

use serde::{Deserialize, Serialize};

/// Smallest brush diameter in canvas pixels
pub const MIN_BRUSH_SIZE: u32 = 5;
/// Largest brush diameter in canvas pixels
pub const MAX_BRUSH_SIZE: u32 = 500;
/// Step used by the bracket shortcuts
pub const BRUSH_SIZE_STEP: i64 = 5;
pub const DEFAULT_BRUSH_SIZE: u32 = 50;

/// Clamp a requested brush size into the supported range.
///
/// Shared by the brush size slider and the bracket shortcuts.
pub fn clamp_brush_size(size: i64) -> u32 {
    size.clamp(MIN_BRUSH_SIZE as i64, MAX_BRUSH_SIZE as i64) as u32
}

/// The drawing tools available on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanvasTool {
    #[default]
    Brush,
    Eraser,
    Fill,
    ColorPicker,
}

impl CanvasTool {
    pub const ALL: [CanvasTool; 4] = [
        CanvasTool::Brush,
        CanvasTool::Eraser,
        CanvasTool::Fill,
        CanvasTool::ColorPicker,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanvasTool::Brush => "brush",
            CanvasTool::Eraser => "eraser",
            CanvasTool::Fill => "fill",
            CanvasTool::ColorPicker => "colorPicker",
        }
    }

    /// Translation key for the tool's label
    pub fn label_key(&self) -> &'static str {
        match self {
            CanvasTool::Brush => "unifiedcanvas:brush",
            CanvasTool::Eraser => "unifiedcanvas:eraser",
            CanvasTool::Fill => "unifiedcanvas:fill",
            CanvasTool::ColorPicker => "unifiedcanvas:colorPicker",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CanvasTool::Brush => "🖌",
            CanvasTool::Eraser => "⌫",
            CanvasTool::Fill => "🪣",
            CanvasTool::ColorPicker => "💧",
        }
    }

    /// Shortcut hint shown next to the label, if the tool has one
    pub fn shortcut_hint(&self) -> Option<&'static str> {
        match self {
            CanvasTool::Brush => Some("B"),
            CanvasTool::Eraser => Some("E"),
            CanvasTool::Fill => None,
            CanvasTool::ColorPicker => Some("C"),
        }
    }
}

impl std::fmt::Display for CanvasTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
