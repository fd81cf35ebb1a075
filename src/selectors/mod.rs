mod memo;
mod readiness;
mod tool_options;

pub use memo::Memo;
pub use readiness::{NotReadyReason, Readiness, ReadinessInputs, ReadinessSelector, derive_readiness};
pub use tool_options::{ToolOptionsSelector, ToolOptionsView};
