use crate::event::EventBus;
use crate::state::CanvasState;

/// Context for command execution, providing access to the canvas state
/// and the event system.
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub canvas: &'a mut CanvasState,
    pub event_bus: &'a EventBus,
}

impl<'a> CommandContext<'a> {
    pub fn new(canvas: &'a mut CanvasState, event_bus: &'a EventBus) -> Self {
        Self { canvas, event_bus }
    }
}
