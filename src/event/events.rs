use uuid::Uuid;

use crate::color::RgbaColor;
use crate::tool::CanvasTool;

#[derive(Debug, Clone, PartialEq)]
pub enum StudioEvent {
    ToolChanged {
        old: CanvasTool,
        new: CanvasTool,
    },
    BrushSizeChanged {
        old: u32,
        new: u32,
    },
    BrushColorChanged {
        old: RgbaColor,
        new: RgbaColor,
    },
    CanvasObjectAdded {
        id: Uuid,
    },
    CanvasObjectRemoved {
        id: Uuid,
    },
    /// The debounced rescale fired and the canvas must be re-fitted
    CanvasScalingRequested,
    LanguageChanged {
        code: &'static str,
    },
}
