use canvas_studio::command::CommandHistory;
use canvas_studio::event::EventBus;
use canvas_studio::input::{CanvasHotkey, HotkeyRegistry, KeyChord};
use canvas_studio::state::{ActiveTab, CanvasState, StagingImage};
use canvas_studio::tool::{CanvasTool, ToolSelector};
use egui::Key;

fn press(registry: &HotkeyRegistry, canvas: &mut CanvasState, chord: KeyChord) -> bool {
    let mut history = CommandHistory::new();
    let bus = EventBus::new();
    let mut selector = ToolSelector::new(canvas, &mut history, &bus);
    registry.dispatch(chord, &mut selector)
}

#[test]
fn test_hotkeys_follow_staging_transitions() {
    let mut registry = HotkeyRegistry::new();
    assert!(!registry.is_subscribed());

    registry.sync_staging(false);
    assert!(registry.is_subscribed());

    registry.sync_staging(true);
    assert!(!registry.is_subscribed());
    registry.sync_staging(true);
    assert!(!registry.is_subscribed());

    registry.sync_staging(false);
    assert!(registry.is_subscribed());
}

#[test]
fn test_staging_first_frame_starts_unsubscribed() {
    let mut registry = HotkeyRegistry::new();
    registry.sync_staging(true);
    assert!(!registry.is_subscribed());
    assert_eq!(registry.resolve(KeyChord::plain(Key::B)), None);
}

#[test]
fn test_bindings() {
    let mut registry = HotkeyRegistry::new();
    registry.sync_staging(false);

    assert_eq!(registry.resolve(KeyChord::plain(Key::B)), Some(CanvasHotkey::SelectBrush));
    assert_eq!(registry.resolve(KeyChord::plain(Key::E)), Some(CanvasHotkey::SelectEraser));
    assert_eq!(registry.resolve(KeyChord::plain(Key::C)), Some(CanvasHotkey::SelectColorPicker));
    assert_eq!(registry.resolve(KeyChord::shift(Key::F)), Some(CanvasHotkey::FillBoundingBox));
    assert_eq!(registry.resolve(KeyChord::plain(Key::F)), None);
    assert_eq!(registry.resolve(KeyChord::plain(Key::Delete)), Some(CanvasHotkey::EraseBoundingBox));
    assert_eq!(
        registry.resolve(KeyChord::plain(Key::Backspace)),
        Some(CanvasHotkey::EraseBoundingBox)
    );
    assert_eq!(registry.resolve(KeyChord::plain(Key::OpenBracket)), Some(CanvasHotkey::ShrinkBrush));
    assert_eq!(registry.resolve(KeyChord::plain(Key::CloseBracket)), Some(CanvasHotkey::GrowBrush));
    assert_eq!(
        registry.resolve(KeyChord::shift(Key::OpenBracket)),
        Some(CanvasHotkey::DecreaseOpacity)
    );
    assert_eq!(
        registry.resolve(KeyChord::shift(Key::CloseBracket)),
        Some(CanvasHotkey::IncreaseOpacity)
    );
}

#[test]
fn test_dispatch_drives_tool_selector() {
    let mut registry = HotkeyRegistry::new();
    let mut canvas = CanvasState::default();
    registry.sync_staging(canvas.is_staging());

    assert!(press(&registry, &mut canvas, KeyChord::plain(Key::E)));
    assert_eq!(canvas.tool, CanvasTool::Eraser);

    assert!(press(&registry, &mut canvas, KeyChord::plain(Key::C)));
    assert_eq!(canvas.tool, CanvasTool::ColorPicker);

    assert!(press(&registry, &mut canvas, KeyChord::plain(Key::CloseBracket)));
    assert_eq!(canvas.brush_size, 55);

    assert!(press(&registry, &mut canvas, KeyChord::shift(Key::F)));
    assert_eq!(canvas.objects.len(), 1);

    assert!(!press(&registry, &mut canvas, KeyChord::plain(Key::Z)));
}

#[test]
fn test_no_hotkey_acts_while_staging() {
    let mut registry = HotkeyRegistry::new();
    let mut canvas = CanvasState::default();
    canvas.staging_area.push(StagingImage::new("pending"));
    registry.sync_staging(canvas.is_staging());
    let before = canvas.clone();

    for chord in [
        KeyChord::plain(Key::B),
        KeyChord::plain(Key::E),
        KeyChord::shift(Key::F),
        KeyChord::plain(Key::Delete),
        KeyChord::shift(Key::CloseBracket),
    ] {
        assert!(!press(&registry, &mut canvas, chord));
    }
    assert_eq!(canvas, before);

    canvas.staging_area.discard_all();
    registry.sync_staging(canvas.is_staging());
    assert!(press(&registry, &mut canvas, KeyChord::plain(Key::E)));
    assert_eq!(canvas.tool, CanvasTool::Eraser);
}

#[test]
fn test_hotkeys_only_live_on_canvas_tab() {
    let mut registry = HotkeyRegistry::new();
    let mut canvas = CanvasState::default();

    for tab in ActiveTab::ALL.into_iter().filter(|tab| *tab != ActiveTab::UnifiedCanvas) {
        registry.sync(tab, false);
        assert!(!registry.is_subscribed(), "{:?}", tab);
        for (chord, _) in canvas_studio::input::default_bindings() {
            assert!(!press(&registry, &mut canvas, chord), "{:?} on {:?}", chord, tab);
        }
    }
    assert_eq!(canvas, CanvasState::default());

    registry.sync(ActiveTab::UnifiedCanvas, false);
    assert!(press(&registry, &mut canvas, KeyChord::plain(Key::Delete)));
    assert_eq!(canvas.objects.len(), 1);

    // Staging on the canvas tab still disables them
    registry.sync(ActiveTab::UnifiedCanvas, true);
    assert!(!registry.is_subscribed());

    // Leaving the tab while staging and coming back after accepting
    registry.sync(ActiveTab::TextToImage, false);
    assert!(!registry.is_subscribed());
    registry.sync(ActiveTab::UnifiedCanvas, false);
    assert!(registry.is_subscribed());
}
