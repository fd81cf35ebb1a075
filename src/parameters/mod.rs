mod seed;
mod seed_weights;

pub use seed::{NUMPY_RAND_MAX, NUMPY_RAND_MIN, clamp_seed, is_seed_invalid};
pub use seed_weights::{
    SeedWeightPair, SeedWeightsError, format_seed_weights, parse_seed_weights, validate_seed_weights,
};
