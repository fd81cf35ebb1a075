/// Smallest seed the backend RNG accepts
pub const NUMPY_RAND_MIN: i64 = 0;
/// Largest seed the backend RNG accepts
pub const NUMPY_RAND_MAX: i64 = 4_294_967_295;

pub fn clamp_seed(seed: i64) -> i64 {
    seed.clamp(NUMPY_RAND_MIN, NUMPY_RAND_MAX)
}

/// Whether the seed field should be flagged.
///
/// Variations need a concrete seed, so a negative (random) one is invalid
/// only while variations are requested.
pub fn is_seed_invalid(seed: i64, should_generate_variations: bool) -> bool {
    seed < 0 && should_generate_variations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_seed() {
        assert_eq!(clamp_seed(-1), NUMPY_RAND_MIN);
        assert_eq!(clamp_seed(42), 42);
        assert_eq!(clamp_seed(i64::MAX), NUMPY_RAND_MAX);
    }

    #[test]
    fn test_negative_seed_only_invalid_with_variations() {
        assert!(is_seed_invalid(-1, true));
        assert!(!is_seed_invalid(-1, false));
        assert!(!is_seed_invalid(0, true));
    }
}
