//! Whether the current state allows submitting a generation request.

use std::fmt;
use std::sync::Arc;

use super::Memo;
use crate::parameters::validate_seed_weights;
use crate::state::{ActiveTab, AppState, ImageRef};

/// Why the generate action is currently blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotReadyReason {
    MissingPrompt,
    NoInitialImage,
    SystemBusy,
    SystemDisconnected,
    BadSeedWeights,
}

impl NotReadyReason {
    pub fn message(&self) -> &'static str {
        match self {
            NotReadyReason::MissingPrompt => "Missing prompt",
            NotReadyReason::NoInitialImage => "No initial image selected",
            NotReadyReason::SystemBusy => "System Busy",
            NotReadyReason::SystemDisconnected => "System Disconnected",
            NotReadyReason::BadSeedWeights => "Seed-Weights badly formatted.",
        }
    }
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readiness {
    pub is_ready: bool,
    /// In rule order
    pub reasons: Vec<NotReadyReason>,
}

impl Readiness {
    pub fn reason_messages(&self) -> Vec<&'static str> {
        self.reasons.iter().map(NotReadyReason::message).collect()
    }
}

/// Everything readiness depends on, pulled out of the app state
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessInputs {
    pub prompt: String,
    pub active_tab: ActiveTab,
    pub initial_image: Option<ImageRef>,
    pub is_processing: bool,
    pub is_connected: bool,
    pub should_generate_variations: bool,
    pub seed_weights: String,
    pub seed: i64,
}

impl ReadinessInputs {
    pub fn from_state(state: &AppState) -> Self {
        let generation = &state.generation;
        Self {
            prompt: generation.prompt.clone(),
            active_tab: state.ui.active_tab,
            initial_image: generation.initial_image.clone(),
            is_processing: state.system.is_processing,
            is_connected: state.system.is_connected,
            should_generate_variations: generation.should_generate_variations,
            seed_weights: generation.seed_weights.clone(),
            seed: generation.seed,
        }
    }
}

/// Evaluate every readiness rule. No rule short-circuits another.
pub fn derive_readiness(inputs: &ReadinessInputs) -> Readiness {
    let mut reasons = Vec::new();

    if inputs.prompt.trim().is_empty() {
        reasons.push(NotReadyReason::MissingPrompt);
    }

    if inputs.active_tab == ActiveTab::ImageToImage && inputs.initial_image.is_none() {
        reasons.push(NotReadyReason::NoInitialImage);
    }

    // TODO: queue requests instead of refusing while a job is running
    if inputs.is_processing {
        reasons.push(NotReadyReason::SystemBusy);
    }

    if !inputs.is_connected {
        reasons.push(NotReadyReason::SystemDisconnected);
    }

    if inputs.should_generate_variations
        && (!validate_seed_weights(&inputs.seed_weights) || inputs.seed == -1)
    {
        reasons.push(NotReadyReason::BadSeedWeights);
    }

    Readiness {
        is_ready: reasons.is_empty(),
        reasons,
    }
}

/// Memoized readiness for the generate button
#[derive(Debug, Default)]
pub struct ReadinessSelector {
    memo: Memo<ReadinessInputs, Readiness>,
}

impl ReadinessSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &AppState) -> Arc<Readiness> {
        self.memo
            .get_or_compute(ReadinessInputs::from_state(state), derive_readiness)
    }
}
