use canvas_studio::event::{EventBus, EventRecorder, StudioEvent};
use canvas_studio::rescale::{CanvasRescaler, frame_time};
use canvas_studio::state::{ActiveTab, CanvasState, UiState};

fn canvas_tab() -> UiState {
    UiState {
        active_tab: ActiveTab::UnifiedCanvas,
    }
}

#[test]
fn test_burst_of_resizes_fires_once_after_last() {
    let bus = EventBus::new();
    let recorder = EventRecorder::new();
    bus.subscribe(Box::new(recorder.clone()));
    let mut canvas = CanvasState::default();
    let mut rescaler = CanvasRescaler::default();
    let ui = canvas_tab();

    // Five resizes within 300ms, polled every frame
    let mut fired = 0;
    for step in 0..5 {
        let now = 10.0 + step as f64 * 0.06;
        rescaler.request(&ui, now);
        if rescaler.poll(&mut canvas, &bus, now) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert!(!canvas.does_canvas_need_scaling);

    // Last request was at 10.24, so nothing before 10.54
    assert!(!rescaler.poll(&mut canvas, &bus, 10.5));
    assert!(rescaler.poll(&mut canvas, &bus, 10.56));
    assert!(!rescaler.poll(&mut canvas, &bus, 11.0));

    assert!(canvas.does_canvas_need_scaling);
    assert_eq!(recorder.events(), vec![StudioEvent::CanvasScalingRequested]);
}

#[test]
fn test_separate_bursts_fire_separately() {
    let bus = EventBus::new();
    let mut canvas = CanvasState::default();
    let mut rescaler = CanvasRescaler::default();
    let ui = canvas_tab();

    rescaler.request(&ui, 1.0);
    assert!(rescaler.poll(&mut canvas, &bus, 1.31));
    rescaler.request(&ui, 2.0);
    assert!(!rescaler.poll(&mut canvas, &bus, 2.2));
    assert!(rescaler.poll(&mut canvas, &bus, 2.31));
}

#[test]
fn test_other_tabs_do_not_request() {
    let bus = EventBus::new();
    let mut canvas = CanvasState::default();
    let mut rescaler = CanvasRescaler::default();

    for tab in ActiveTab::ALL.into_iter().filter(|tab| *tab != ActiveTab::UnifiedCanvas) {
        rescaler.request(&UiState { active_tab: tab }, 1.0);
    }
    assert_eq!(rescaler.remaining(1.0), None);
    assert!(!rescaler.poll(&mut canvas, &bus, 5.0));
    assert!(!canvas.does_canvas_need_scaling);
}

// Run one egui frame at `time` and report what the app would use as `now`
fn run_frame(ctx: &egui::Context, time: f64) -> f64 {
    let mut now = f64::NAN;
    let _ = ctx.run(
        egui::RawInput {
            time: Some(time),
            ..Default::default()
        },
        |ctx| now = frame_time(ctx),
    );
    now
}

#[test]
fn test_rescale_follows_frame_clock() {
    let ctx = egui::Context::default();
    let bus = EventBus::new();
    let mut canvas = CanvasState::default();
    let mut rescaler = CanvasRescaler::default();

    let now = run_frame(&ctx, 100.0);
    assert_eq!(now, 100.0);
    rescaler.request(&canvas_tab(), now);

    assert!(!rescaler.poll(&mut canvas, &bus, run_frame(&ctx, 100.2)));
    assert!(rescaler.poll(&mut canvas, &bus, run_frame(&ctx, 100.31)));
    assert!(canvas.does_canvas_need_scaling);
}
