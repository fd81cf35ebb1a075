use eframe::egui::{Key, Modifiers};

use crate::state::ActiveTab;
use crate::tool::{CanvasTool, ToolSelector};

/// A key plus whether shift is held. Other modifiers never match a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub shift: bool,
}

impl KeyChord {
    pub const fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub const fn shift(key: Key) -> Self {
        Self { key, shift: true }
    }

    /// Build a chord from an egui key event.
    ///
    /// Returns `None` when ctrl, alt or command is held, so those
    /// combinations stay free for the rest of the UI.
    pub fn from_event(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.ctrl || modifiers.alt || modifiers.command || modifiers.mac_cmd {
            return None;
        }
        Some(Self {
            key,
            shift: modifiers.shift,
        })
    }
}

/// Actions reachable from the keyboard on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasHotkey {
    SelectBrush,
    SelectEraser,
    SelectColorPicker,
    FillBoundingBox,
    EraseBoundingBox,
    ShrinkBrush,
    GrowBrush,
    DecreaseOpacity,
    IncreaseOpacity,
}

impl CanvasHotkey {
    pub fn apply(self, selector: &mut ToolSelector<'_>) {
        match self {
            CanvasHotkey::SelectBrush => selector.select_tool(CanvasTool::Brush),
            CanvasHotkey::SelectEraser => selector.select_tool(CanvasTool::Eraser),
            CanvasHotkey::SelectColorPicker => selector.select_tool(CanvasTool::ColorPicker),
            CanvasHotkey::FillBoundingBox => selector.fill_canvas(),
            CanvasHotkey::EraseBoundingBox => selector.erase_canvas_region(),
            CanvasHotkey::ShrinkBrush => selector.shrink_brush(),
            CanvasHotkey::GrowBrush => selector.grow_brush(),
            CanvasHotkey::DecreaseOpacity => selector.decrease_opacity(),
            CanvasHotkey::IncreaseOpacity => selector.increase_opacity(),
        }
    }
}

/// The canvas tool shortcuts
pub fn default_bindings() -> Vec<(KeyChord, CanvasHotkey)> {
    vec![
        (KeyChord::plain(Key::B), CanvasHotkey::SelectBrush),
        (KeyChord::plain(Key::E), CanvasHotkey::SelectEraser),
        (KeyChord::plain(Key::C), CanvasHotkey::SelectColorPicker),
        (KeyChord::shift(Key::F), CanvasHotkey::FillBoundingBox),
        (KeyChord::plain(Key::Delete), CanvasHotkey::EraseBoundingBox),
        (KeyChord::plain(Key::Backspace), CanvasHotkey::EraseBoundingBox),
        (KeyChord::plain(Key::OpenBracket), CanvasHotkey::ShrinkBrush),
        (KeyChord::plain(Key::CloseBracket), CanvasHotkey::GrowBrush),
        (KeyChord::shift(Key::OpenBracket), CanvasHotkey::DecreaseOpacity),
        (KeyChord::shift(Key::CloseBracket), CanvasHotkey::IncreaseOpacity),
    ]
}

/// Keyboard shortcuts for the canvas tools, live only while not staging.
///
/// `sync` must be called with the active tab and staging flag every frame.
/// The bindings exist only while the canvas tab is showing and nothing is
/// staged; the registry subscribes and unsubscribes on each transition.
#[derive(Debug, Default)]
pub struct HotkeyRegistry {
    bindings: Vec<(KeyChord, CanvasHotkey)>,
    last_live: Option<bool>,
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self) -> bool {
        !self.bindings.is_empty()
    }

    pub fn subscribe(&mut self) {
        if !self.is_subscribed() {
            log::debug!("Canvas hotkeys enabled");
            self.bindings = default_bindings();
        }
    }

    pub fn unsubscribe(&mut self) {
        if self.is_subscribed() {
            log::debug!("Canvas hotkeys disabled");
            self.bindings.clear();
        }
    }

    /// Re-evaluate the subscription for the current frame
    pub fn sync(&mut self, active_tab: ActiveTab, is_staging: bool) {
        self.set_live(active_tab == ActiveTab::UnifiedCanvas && !is_staging);
    }

    /// Re-evaluate the subscription against the staging flag alone, with
    /// the canvas assumed to be showing.
    pub fn sync_staging(&mut self, is_staging: bool) {
        self.set_live(!is_staging);
    }

    // Acts only when liveness differs from the last call (or on the first
    // call), so it is cheap to run every frame.
    fn set_live(&mut self, live: bool) {
        if self.last_live == Some(live) {
            return;
        }
        self.last_live = Some(live);
        if live {
            self.subscribe();
        } else {
            self.unsubscribe();
        }
    }

    /// The action bound to `chord`, if the hotkeys are live
    pub fn resolve(&self, chord: KeyChord) -> Option<CanvasHotkey> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == chord)
            .map(|(_, action)| *action)
    }

    /// Resolve and run a chord. Returns true if it was bound.
    pub fn dispatch(&self, chord: KeyChord, selector: &mut ToolSelector<'_>) -> bool {
        match self.resolve(chord) {
            Some(action) => {
                log::debug!("Hotkey {:?} -> {:?}", chord, action);
                action.apply(selector);
                true
            }
            None => false,
        }
    }
}
