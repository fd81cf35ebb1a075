use eframe::egui::{self, Context, Pos2, Rect};

mod hotkeys;
pub use hotkeys::{CanvasHotkey, HotkeyRegistry, KeyChord, default_bindings};

/// Input relevant to the canvas, distilled from a frame of raw egui input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down with no ctrl/alt/command held
    KeyPressed(KeyChord),
    /// Pointer moved inside the canvas
    PointerMove { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas panel rectangle
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    fn in_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// Key presses are dropped while a text field has focus.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let wants_keyboard = ctx.wants_keyboard_input();
        let (hover, raw_keys) = ctx.input(|input| {
            let keys: Vec<_> = input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        physical_key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((physical_key.unwrap_or(*key), *modifiers)),
                    _ => None,
                })
                .collect();
            (input.pointer.hover_pos(), keys)
        });

        let mut events = self.pointer_events(hover);
        if !wants_keyboard {
            events.extend(
                raw_keys
                    .into_iter()
                    .filter_map(|(key, modifiers)| KeyChord::from_event(key, modifiers))
                    .map(InputEvent::KeyPressed),
            );
        }
        events
    }

    /// Track the pointer against the canvas rect
    pub fn pointer_events(&mut self, hover: Option<Pos2>) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match hover.filter(|pos| self.in_canvas(*pos)) {
            Some(pos) => {
                if self.last_pointer_pos != Some(pos) {
                    events.push(InputEvent::PointerMove { position: pos });
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                if self.last_pointer_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }
        events
    }
}
