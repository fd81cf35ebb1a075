mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::StudioEvent;
pub use handlers::{EventRecorder, LoggingEventHandler};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &StudioEvent);
}
