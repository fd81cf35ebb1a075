use crate::color::{ALPHA_STEP, RgbaColor};
use crate::command::{CanvasCommand, CommandContext, CommandError, CommandHistory, CommandResult};
use crate::event::EventBus;
use crate::state::CanvasState;

use super::{BRUSH_SIZE_STEP, CanvasTool};

/// Front door for every tool option edit on the canvas.
///
/// Borrows the canvas state, history and event bus for the duration of one
/// interaction. Every edit goes through a [`CanvasCommand`], so all of them
/// are suppressed while the canvas is staging. Suppressed edits are dropped
/// silently; there is no error path for the caller.
pub struct ToolSelector<'a> {
    canvas: &'a mut CanvasState,
    history: &'a mut CommandHistory,
    event_bus: &'a EventBus,
}

impl<'a> ToolSelector<'a> {
    pub fn new(
        canvas: &'a mut CanvasState,
        history: &'a mut CommandHistory,
        event_bus: &'a EventBus,
    ) -> Self {
        Self {
            canvas,
            history,
            event_bus,
        }
    }

    pub fn tool(&self) -> CanvasTool {
        self.canvas.tool
    }

    pub fn brush_size(&self) -> u32 {
        self.canvas.brush_size
    }

    pub fn brush_color(&self) -> RgbaColor {
        self.canvas.brush_color
    }

    pub fn is_staging(&self) -> bool {
        self.canvas.is_staging()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_staging() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_staging() && self.history.can_redo()
    }

    pub fn select_tool(&mut self, tool: CanvasTool) {
        self.run(CanvasCommand::SetTool(tool));
    }

    pub fn set_brush_size(&mut self, size: i64) {
        self.run(CanvasCommand::SetBrushSize(size));
    }

    pub fn shrink_brush(&mut self) {
        self.set_brush_size(self.canvas.brush_size as i64 - BRUSH_SIZE_STEP);
    }

    pub fn grow_brush(&mut self) {
        self.set_brush_size(self.canvas.brush_size as i64 + BRUSH_SIZE_STEP);
    }

    pub fn set_brush_color(&mut self, color: RgbaColor) {
        self.run(CanvasCommand::SetBrushColor(color));
    }

    pub fn decrease_opacity(&mut self) {
        let color = self.canvas.brush_color;
        self.set_brush_color(color.with_alpha(color.a - ALPHA_STEP));
    }

    pub fn increase_opacity(&mut self) {
        let color = self.canvas.brush_color;
        self.set_brush_color(color.with_alpha(color.a + ALPHA_STEP));
    }

    /// Fill the bounding box with the current brush colour
    pub fn fill_canvas(&mut self) {
        self.run(CanvasCommand::fill_bounding_box());
    }

    /// Erase everything inside the bounding box
    pub fn erase_canvas_region(&mut self) {
        self.run(CanvasCommand::erase_bounding_box());
    }

    pub fn undo(&mut self) {
        let result = self.history.undo(&mut CommandContext::new(self.canvas, self.event_bus));
        Self::log_outcome("undo", result);
    }

    pub fn redo(&mut self) {
        let result = self.history.redo(&mut CommandContext::new(self.canvas, self.event_bus));
        Self::log_outcome("redo", result);
    }

    fn run(&mut self, command: CanvasCommand) {
        let label = format!("{:?}", command);
        let mut ctx = CommandContext::new(self.canvas, self.event_bus);
        let result = self.history.execute(command, &mut ctx);
        Self::log_outcome(&label, result);
    }

    fn log_outcome(what: &str, result: CommandResult) {
        match result {
            Ok(()) => {}
            Err(CommandError::Staging) => log::debug!("Ignoring {} while staging", what),
            Err(err) => log::debug!("{} had no effect: {}", what, err),
        }
    }
}
