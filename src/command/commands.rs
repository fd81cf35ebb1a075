use super::{CommandContext, CommandError, CommandResult};
use crate::color::RgbaColor;
use crate::event::StudioEvent;
use crate::state::CanvasObject;
use crate::tool::{CanvasTool, clamp_brush_size};
use uuid::Uuid;

/// Commands that can be executed against the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    /// Change the active tool
    SetTool(CanvasTool),

    /// Change the brush diameter; out of range sizes are clamped
    SetBrushSize(i64),

    /// Change the brush colour; alpha is clamped
    SetBrushColor(RgbaColor),

    /// Paint the bounding box with the brush colour
    FillBoundingBox { id: Uuid },

    /// Clear the bounding box
    EraseBoundingBox { id: Uuid },

    /// Take a previously added object off the canvas
    RemoveObject { id: Uuid },

    /// Put a removed object back
    RestoreObject(CanvasObject),
}

impl CanvasCommand {
    pub fn fill_bounding_box() -> Self {
        CanvasCommand::FillBoundingBox { id: Uuid::new_v4() }
    }

    pub fn erase_bounding_box() -> Self {
        CanvasCommand::EraseBoundingBox { id: Uuid::new_v4() }
    }

    /// Execute the command with the given context
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.canvas.is_staging() {
            return Err(CommandError::Staging);
        }

        match self {
            CanvasCommand::SetTool(tool) => {
                let old = ctx.canvas.tool;
                if old != *tool {
                    ctx.canvas.tool = *tool;
                    ctx.event_bus.emit(StudioEvent::ToolChanged { old, new: *tool });
                }
                Ok(())
            }

            CanvasCommand::SetBrushSize(size) => {
                let old = ctx.canvas.brush_size;
                let new = clamp_brush_size(*size);
                if old != new {
                    ctx.canvas.brush_size = new;
                    ctx.event_bus.emit(StudioEvent::BrushSizeChanged { old, new });
                }
                Ok(())
            }

            CanvasCommand::SetBrushColor(color) => {
                let old = ctx.canvas.brush_color;
                let new = color.clamped();
                if old != new {
                    ctx.canvas.brush_color = new;
                    ctx.event_bus.emit(StudioEvent::BrushColorChanged { old, new });
                }
                Ok(())
            }

            CanvasCommand::FillBoundingBox { id } => {
                let object = CanvasObject::FillRect {
                    id: *id,
                    rect: ctx.canvas.bounding_box,
                    color: ctx.canvas.brush_color,
                };
                add_object(ctx, object);
                Ok(())
            }

            CanvasCommand::EraseBoundingBox { id } => {
                let object = CanvasObject::EraseRect {
                    id: *id,
                    rect: ctx.canvas.bounding_box,
                };
                add_object(ctx, object);
                Ok(())
            }

            CanvasCommand::RemoveObject { id } => {
                ctx.canvas
                    .remove_object(*id)
                    .ok_or(CommandError::ObjectNotFound(*id))?;
                ctx.event_bus.emit(StudioEvent::CanvasObjectRemoved { id: *id });
                Ok(())
            }

            CanvasCommand::RestoreObject(object) => {
                add_object(ctx, object.clone());
                Ok(())
            }
        }
    }

    /// Returns true if this command can be undone
    pub fn can_undo(&self) -> bool {
        matches!(
            self,
            CanvasCommand::FillBoundingBox { .. }
                | CanvasCommand::EraseBoundingBox { .. }
                | CanvasCommand::RestoreObject(_)
        )
    }

    /// Creates the inverse of this command for undo, capturing whatever it
    /// needs from the current state
    pub fn inverse(&self, ctx: &CommandContext<'_>) -> Option<CanvasCommand> {
        match self {
            CanvasCommand::FillBoundingBox { id } | CanvasCommand::EraseBoundingBox { id } => {
                ctx.canvas.object(*id).map(|_| CanvasCommand::RemoveObject { id: *id })
            }
            CanvasCommand::RestoreObject(object) => {
                let id = object.id();
                ctx.canvas.object(id).map(|_| CanvasCommand::RemoveObject { id })
            }
            _ => None,
        }
    }
}

fn add_object(ctx: &mut CommandContext<'_>, object: CanvasObject) {
    let id = object.id();
    ctx.canvas.objects.push(object);
    ctx.event_bus.emit(StudioEvent::CanvasObjectAdded { id });
}
