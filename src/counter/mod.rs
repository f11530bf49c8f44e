use std::io::Read;

use camino::Utf8Path as Path;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::types::{parse_dataset, Range};
use crate::util::{floor_sqrt, is_prime};

pub mod error;

pub use error::DatasetError;

/// Counts how many magic numbers (squares of primes) fall into each of the ranges.
///
/// A magic number lying in several ranges is counted once per range. Returns `None`
/// when there are no ranges to evaluate, which is different from finding zero.
#[instrument(skip_all, level = "debug", fields(ranges = ranges.len()))]
pub fn count(ranges: &[Range]) -> Option<u64> {
    let (min_el, max_el) = bounds(ranges)?;
    let magic_numbers = magic_numbers_between(min_el, max_el);
    debug!(
        min_el,
        max_el,
        candidates = magic_numbers.len(),
        "Enumerated magic numbers"
    );

    let total = ranges
        .iter()
        .map(|range| {
            // `magic_numbers` is sorted, so each range covers a contiguous slice of it
            let lower = magic_numbers.partition_point(|&m| m < range.begin);
            let upper = magic_numbers.partition_point(|&m| m <= range.end);
            upper.saturating_sub(lower) as u64
        })
        .sum();
    Some(total)
}

/// Smallest range start and largest range end.
fn bounds(ranges: &[Range]) -> Option<(i64, i64)> {
    let first = ranges.first()?;
    Some(ranges.iter().fold((first.begin, first.end), |(lo, hi), range| {
        (lo.min(range.begin), hi.max(range.end))
    }))
}

/// Squares of all primes `p` with `floor(sqrt(min_el)) <= p <= floor(sqrt(max_el))`,
/// in ascending order.
///
/// Squares below `min_el` may be included.
pub fn magic_numbers_between(min_el: i64, max_el: i64) -> Vec<i64> {
    if max_el < 0 {
        return Vec::new();
    }
    let min_root = floor_sqrt(min_el.max(0) as u64) as i64;
    let max_root = floor_sqrt(max_el as u64) as i64;
    (min_root..=max_root)
        .filter(|&root| is_prime(root))
        .map(|root| root * root)
        .collect()
}

pub fn count_value(value: &Value) -> Result<Option<u64>, DatasetError> {
    Ok(parse_dataset(value)?.and_then(|dataset| count(&dataset)))
}

pub fn count_from_json(json: &str) -> Result<Option<u64>, DatasetError> {
    let value: Value = serde_json::from_str(json)?;
    count_value(&value)
}

pub fn count_from_reader(mut reader: impl Read) -> Result<Option<u64>, DatasetError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    let value: Value = serde_json::from_slice(&content)?;
    count_value(&value)
}

#[instrument(level = "debug")]
pub fn count_from_file(path: &Path) -> Result<Option<u64>, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    count_from_json(&content)
}
