mod canvas;
mod generation;
pub mod persistence;
mod system;
mod ui;

pub use canvas::{CanvasObject, CanvasState, DEFAULT_BOUNDING_BOX_SIZE, StagingArea, StagingImage};
pub use generation::{GenerationState, ImageRef};
pub use persistence::{LANGUAGE_STORAGE_KEY, PersistenceError, PersistenceResult};
pub use system::SystemState;
pub use ui::{ActiveTab, UiState};

use crate::config::StudioConfig;

/// The whole client state, passed explicitly to whoever reads or writes it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub generation: GenerationState,
    pub system: SystemState,
    pub canvas: CanvasState,
    pub ui: UiState,
}

impl AppState {
    pub fn from_config(config: &StudioConfig) -> Self {
        Self {
            canvas: CanvasState::new(
                config.initial_tool,
                config.initial_brush_size,
                config.initial_brush_color,
            ),
            ..Self::default()
        }
    }
}
