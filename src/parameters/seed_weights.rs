//! Seed-weight lists for blended variations.
//!
//! The textual form is a comma separated list of `seed:weight` entries,
//! e.g. `"1234:0.5,5678:0.25"`.

use thiserror::Error;

use super::seed::NUMPY_RAND_MAX;

/// One seed and how strongly it contributes to the blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedWeightPair {
    pub seed: u32,
    pub weight: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum SeedWeightsError {
    #[error("seed-weight list is empty")]
    Empty,
    #[error("entry {index} is not a seed:weight pair: {entry:?}")]
    MalformedPair { index: usize, entry: String },
    #[error("entry {index} has an invalid seed: {seed:?}")]
    InvalidSeed { index: usize, seed: String },
    #[error("entry {index} has an invalid weight: {weight:?}")]
    InvalidWeight { index: usize, weight: String },
}

fn parse_seed(index: usize, raw: &str) -> Result<u32, SeedWeightsError> {
    let invalid = || SeedWeightsError::InvalidSeed {
        index,
        seed: raw.to_owned(),
    };
    let seed: i64 = raw.parse().map_err(|_| invalid())?;
    if !(0..=NUMPY_RAND_MAX).contains(&seed) {
        return Err(invalid());
    }
    u32::try_from(seed).map_err(|_| invalid())
}

fn parse_weight(index: usize, raw: &str) -> Result<f32, SeedWeightsError> {
    let invalid = || SeedWeightsError::InvalidWeight {
        index,
        weight: raw.to_owned(),
    };
    let weight: f32 = raw.parse().map_err(|_| invalid())?;
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(invalid());
    }
    Ok(weight)
}

/// Parse a seed-weight list. Any malformed entry rejects the whole list.
pub fn parse_seed_weights(input: &str) -> Result<Vec<SeedWeightPair>, SeedWeightsError> {
    if input.trim().is_empty() {
        return Err(SeedWeightsError::Empty);
    }

    input
        .split(',')
        .enumerate()
        .map(|(index, entry)| {
            let mut parts = entry.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(seed), Some(weight), None) => Ok(SeedWeightPair {
                    seed: parse_seed(index, seed.trim())?,
                    weight: parse_weight(index, weight.trim())?,
                }),
                _ => Err(SeedWeightsError::MalformedPair {
                    index,
                    entry: entry.to_owned(),
                }),
            }
        })
        .collect()
}

/// True for the empty string or a well-formed list
pub fn validate_seed_weights(input: &str) -> bool {
    input.is_empty() || parse_seed_weights(input).is_ok()
}

pub fn format_seed_weights(pairs: &[SeedWeightPair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}:{}", pair.seed, pair.weight))
        .collect::<Vec<_>>()
        .join(",")
}
