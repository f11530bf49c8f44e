use anyhow::{bail, Result};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::types::{Dataset, Range};
use crate::util::{is_prime, perfect_sqrt};

/// A dataset together with its expected magic numbers count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDataset {
    pub magic_numbers: u64,
    pub dataset: Dataset,
}

pub fn generate_dataset(
    rng: &mut impl Rng,
    n: usize,
    min_el: i64,
    max_el: i64,
) -> Result<Dataset> {
    if min_el > max_el {
        bail!("Invalid element bounds: {} > {}", min_el, max_el);
    }
    Ok((0..n)
        .map(|_| {
            let a = rng.gen_range(min_el..=max_el);
            let b = rng.gen_range(min_el..=max_el);
            Range::new(a.min(b), a.max(b))
        })
        .collect_vec())
}

/// Walks every value of every range. Only usable for small value domains.
pub fn brute_force_count(ranges: &[Range]) -> u64 {
    ranges
        .iter()
        .map(|range| {
            (range.begin..=range.end)
                .filter(|&value| perfect_sqrt(value).is_some_and(is_prime))
                .count() as u64
        })
        .sum()
}

#[instrument(skip(rng))]
pub fn generate(
    rng: &mut impl Rng,
    n: usize,
    min_el: i64,
    max_el: i64,
) -> Result<GeneratedDataset> {
    let dataset = generate_dataset(rng, n, min_el, max_el)?;
    let magic_numbers = brute_force_count(&dataset);
    info!(magic_numbers, "Generated dataset");
    Ok(GeneratedDataset {
        magic_numbers,
        dataset,
    })
}
