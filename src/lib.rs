#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod event;
pub mod i18n;
pub mod input;
pub mod panels;
pub mod parameters;
pub mod rescale;
pub mod selectors;
pub mod state;
pub mod tool;
pub mod util;

pub use app::StudioApp;
pub use color::RgbaColor;
pub use command::{CanvasCommand, CommandError, CommandHistory};
pub use config::StudioConfig;
pub use event::{EventBus, StudioEvent};
pub use i18n::{LanguagePicker, Translator};
pub use input::{HotkeyRegistry, InputEvent, KeyChord};
pub use rescale::CanvasRescaler;
pub use selectors::{Readiness, ReadinessSelector, derive_readiness};
pub use state::AppState;
pub use tool::{CanvasTool, ToolSelector};
