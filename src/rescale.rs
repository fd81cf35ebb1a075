//! Debounced "the canvas needs re-fitting" requests.
//!
//! Resizes arrive in bursts; only the last request of a burst should make
//! the canvas rescale, 300ms after it settles.

use std::time::Duration;

use eframe::egui;

use crate::event::{EventBus, StudioEvent};
use crate::state::{ActiveTab, CanvasState, UiState};
use crate::util::time::secs_to_duration;

pub const CANVAS_RESCALE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Seconds on the egui frame clock. Every rescale request and poll uses it.
pub fn frame_time(ctx: &egui::Context) -> f64 {
    ctx.input(|input| input.time)
}

/// Trailing-edge debounce on a caller-supplied clock (seconds).
///
/// Each `call` pushes the deadline out; `poll` fires once the deadline has
/// passed with no newer call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.as_secs_f64(),
            deadline: None,
        }
    }

    pub fn call(&mut self, now: f64) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending call fires
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.deadline.map(|deadline| secs_to_duration(deadline - now))
    }

    /// Returns true exactly once per settled burst of calls
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Coalesces canvas rescale requests from the unified canvas tab
#[derive(Debug, Clone)]
pub struct CanvasRescaler {
    debouncer: Debouncer,
}

impl Default for CanvasRescaler {
    fn default() -> Self {
        Self::new(CANVAS_RESCALE_DEBOUNCE)
    }
}

impl CanvasRescaler {
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
        }
    }

    /// Ask for a rescale. Ignored unless the canvas tab is showing.
    pub fn request(&mut self, ui: &UiState, now: f64) {
        if ui.active_tab == ActiveTab::UnifiedCanvas {
            self.debouncer.call(now);
        }
    }

    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Flag the canvas for scaling if the debounce window has closed
    pub fn poll(&mut self, canvas: &mut CanvasState, event_bus: &EventBus, now: f64) -> bool {
        if !self.debouncer.poll(now) {
            return false;
        }
        log::debug!("Canvas rescale requested");
        canvas.does_canvas_need_scaling = true;
        event_bus.emit(StudioEvent::CanvasScalingRequested);
        true
    }
}
