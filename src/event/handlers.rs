use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, StudioEvent};

/// Writes every event to the log at debug level
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &StudioEvent) {
        log::debug!("{:?}", event);
    }
}

/// Keeps a copy of every event it sees, shareable with the code that
/// registered it
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<StudioEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StudioEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &StudioEvent) {
        self.events.lock().push(event.clone());
    }
}
