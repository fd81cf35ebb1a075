/// Backend connection slice of the application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    pub is_processing: bool,
    pub is_connected: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            is_processing: false,
            is_connected: true,
        }
    }
}

impl SystemState {
    pub fn set_connected(&mut self, connected: bool) {
        if self.is_connected != connected {
            log::info!("Backend {}", if connected { "connected" } else { "disconnected" });
        }
        self.is_connected = connected;
        if !connected {
            self.is_processing = false;
        }
    }

    pub fn set_processing(&mut self, processing: bool) {
        self.is_processing = processing;
    }
}
