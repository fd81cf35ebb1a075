use super::{CanvasCommand, CommandContext, CommandError, CommandResult};

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<CanvasCommand>,
    /// Stack of commands that can be redone
    redo_stack: Vec<CanvasCommand>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and add it to the history if successful
    pub fn execute(&mut self, command: CanvasCommand, ctx: &mut CommandContext<'_>) -> CommandResult {
        command.execute(ctx)?;

        if command.can_undo() {
            self.undo_stack.push(command);
            self.redo_stack.clear();
        }

        Ok(())
    }

    /// Undo the last executed command
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.canvas.is_staging() {
            return Err(CommandError::Staging);
        }
        let command = self.undo_stack.pop().ok_or(CommandError::EmptyHistory)?;
        let Some(inverse) = command.inverse(ctx) else {
            log::warn!("Dropping {:?} from history: nothing left to undo", command);
            return Err(CommandError::EmptyHistory);
        };

        // Redo must bring back this exact object, not a fresh fill.
        let removed = match &inverse {
            CanvasCommand::RemoveObject { id } => ctx.canvas.object(*id).cloned(),
            _ => None,
        };

        if let Err(err) = inverse.execute(ctx) {
            self.undo_stack.push(command);
            return Err(err);
        }

        match removed {
            Some(object) => self.redo_stack.push(CanvasCommand::RestoreObject(object)),
            None => self.redo_stack.push(command),
        }
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let command = self.redo_stack.pop().ok_or(CommandError::EmptyHistory)?;
        if let Err(err) = command.execute(ctx) {
            self.redo_stack.push(command);
            return Err(err);
        }
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[CanvasCommand] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[CanvasCommand] {
        &self.redo_stack
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
