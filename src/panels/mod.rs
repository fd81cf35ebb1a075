mod central_panel;
mod language_menu;
mod parameters_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use language_menu::language_menu;
pub use parameters_panel::{invoke_button, parameters_panel};
pub use tools_panel::tools_panel;
