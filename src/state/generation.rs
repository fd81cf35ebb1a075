use serde::{Deserialize, Serialize};

use crate::parameters::clamp_seed;

/// Reference to an image already known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Generation parameters slice of the application state
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationState {
    pub prompt: String,
    pub negative_prompt: String,
    /// -1 means "pick a random seed"
    pub seed: i64,
    pub should_randomize_seed: bool,
    pub should_generate_variations: bool,
    pub seed_weights: String,
    pub variation_amount: f32,
    pub initial_image: Option<ImageRef>,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: String::new(),
            seed: 0,
            should_randomize_seed: true,
            should_generate_variations: false,
            seed_weights: String::new(),
            variation_amount: 0.1,
            initial_image: None,
        }
    }
}

impl GenerationState {
    /// Store a seed entered by the user, clamped to the numpy RNG range
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = clamp_seed(seed);
    }

    pub fn set_variation_amount(&mut self, amount: f32) {
        self.variation_amount = amount.clamp(0.0, 1.0);
    }
}
