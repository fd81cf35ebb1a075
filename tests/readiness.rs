use std::sync::Arc;

use canvas_studio::selectors::{NotReadyReason, ReadinessSelector, derive_readiness};
use canvas_studio::state::{ActiveTab, AppState, ImageRef};

// Helper for a state that passes every rule
fn ready_state() -> AppState {
    let mut state = AppState::default();
    state.generation.prompt = "a lighthouse at dusk".to_owned();
    state
}

fn reasons(state: &AppState) -> Vec<&'static str> {
    ReadinessSelector::new().select(state).reason_messages()
}

#[test]
fn test_ready_when_all_rules_pass() {
    let readiness = ReadinessSelector::new().select(&ready_state());
    assert!(readiness.is_ready);
    assert!(readiness.reasons.is_empty());
}

#[test]
fn test_empty_prompt_is_the_only_reason() {
    let mut state = ready_state();
    state.generation.prompt.clear();

    let readiness = ReadinessSelector::new().select(&state);
    assert!(!readiness.is_ready);
    assert_eq!(readiness.reasons, vec![NotReadyReason::MissingPrompt]);
    assert_eq!(readiness.reason_messages(), vec!["Missing prompt"]);
}

#[test]
fn test_whitespace_prompt_is_missing() {
    let mut state = ready_state();
    state.generation.prompt = "  \t\n ".to_owned();
    assert_eq!(reasons(&state), vec!["Missing prompt"]);
}

#[test]
fn test_img2img_needs_initial_image() {
    let mut state = ready_state();
    state.ui.active_tab = ActiveTab::ImageToImage;
    assert_eq!(reasons(&state), vec!["No initial image selected"]);

    state.generation.initial_image = Some(ImageRef {
        name: "init.png".to_owned(),
        width: 512,
        height: 512,
    });
    assert!(reasons(&state).is_empty());

    state.generation.initial_image = None;
    state.ui.active_tab = ActiveTab::UnifiedCanvas;
    assert!(reasons(&state).is_empty());
}

#[test]
fn test_busy_and_disconnected() {
    let mut state = ready_state();
    state.system.is_processing = true;
    assert_eq!(reasons(&state), vec!["System Busy"]);

    state.system.is_processing = false;
    state.system.is_connected = false;
    assert_eq!(reasons(&state), vec!["System Disconnected"]);
}

#[test]
fn test_seed_weights_only_checked_with_variations() {
    let mut state = ready_state();
    state.generation.seed_weights = "1:1.5".to_owned();
    assert!(reasons(&state).is_empty());

    state.generation.should_generate_variations = true;
    assert_eq!(reasons(&state), vec!["Seed-Weights badly formatted."]);

    state.generation.seed_weights = "1:0.5,2:0.25".to_owned();
    assert!(reasons(&state).is_empty());

    state.generation.seed_weights.clear();
    assert!(reasons(&state).is_empty());
}

#[test]
fn test_random_seed_fails_with_variations_even_with_empty_weights() {
    let mut state = ready_state();
    state.generation.should_generate_variations = true;
    state.generation.seed = -1;
    assert_eq!(reasons(&state), vec!["Seed-Weights badly formatted."]);

    state.generation.should_generate_variations = false;
    assert!(reasons(&state).is_empty());
}

#[test]
fn test_all_reasons_in_rule_order() {
    let mut state = AppState::default();
    state.ui.active_tab = ActiveTab::ImageToImage;
    state.system.is_processing = true;
    state.system.is_connected = false;
    state.generation.should_generate_variations = true;
    state.generation.seed_weights = "abc".to_owned();

    let readiness = ReadinessSelector::new().select(&state);
    assert!(!readiness.is_ready);
    assert_eq!(
        readiness.reasons,
        vec![
            NotReadyReason::MissingPrompt,
            NotReadyReason::NoInitialImage,
            NotReadyReason::SystemBusy,
            NotReadyReason::SystemDisconnected,
            NotReadyReason::BadSeedWeights,
        ]
    );
    assert_eq!(
        readiness.reason_messages(),
        vec![
            "Missing prompt",
            "No initial image selected",
            "System Busy",
            "System Disconnected",
            "Seed-Weights badly formatted.",
        ]
    );
}

#[test]
fn test_selector_reuses_result_for_equal_inputs() {
    let selector = ReadinessSelector::new();
    let mut state = ready_state();

    let first = selector.select(&state);
    let second = selector.select(&state);
    assert!(Arc::ptr_eq(&first, &second));

    // Unrelated state does not invalidate the cached result
    state.canvas.brush_size = 120;
    state.generation.negative_prompt = "blurry".to_owned();
    assert!(Arc::ptr_eq(&first, &selector.select(&state)));

    state.system.is_processing = true;
    let third = selector.select(&state);
    assert!(!third.is_ready);
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn test_derive_matches_selector() {
    use canvas_studio::selectors::ReadinessInputs;

    let mut state = ready_state();
    state.system.is_connected = false;
    let direct = derive_readiness(&ReadinessInputs::from_state(&state));
    assert_eq!(direct, *ReadinessSelector::new().select(&state));
}
