mod commands;
mod context;
mod history;

use thiserror::Error;

pub use commands::CanvasCommand;
pub use context::CommandContext;
pub use history::CommandHistory;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// The canvas is showing staged results and its tools are locked
    #[error("canvas is staging; tool edits are suspended")]
    Staging,
    /// Nothing to undo or redo
    #[error("history is empty")]
    EmptyHistory,
    /// The object an undo/redo refers to is gone
    #[error("canvas object {0} not found")]
    ObjectNotFound(uuid::Uuid),
}
