use std::sync::Arc;

use super::Memo;
use crate::color::RgbaColor;
use crate::state::AppState;
use crate::tool::CanvasTool;

/// What the tool chooser needs to draw itself
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOptionsView {
    pub tool: CanvasTool,
    pub is_staging: bool,
    pub is_processing: bool,
    pub brush_color: RgbaColor,
    pub brush_size: u32,
}

impl ToolOptionsView {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            tool: state.canvas.tool,
            is_staging: state.canvas.is_staging(),
            is_processing: state.system.is_processing,
            brush_color: state.canvas.brush_color,
            brush_size: state.canvas.brush_size,
        }
    }

    /// A tool button shows as selected only outside staging
    pub fn is_selected(&self, tool: CanvasTool) -> bool {
        self.tool == tool && !self.is_staging
    }
}

#[derive(Debug, Default)]
pub struct ToolOptionsSelector {
    memo: Memo<ToolOptionsView, ToolOptionsView>,
}

impl ToolOptionsSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &AppState) -> Arc<ToolOptionsView> {
        self.memo
            .get_or_compute(ToolOptionsView::from_state(state), ToolOptionsView::clone)
    }
}
