#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers. NaN is considered as the greatest value, so individuals with
/// broken fitness end up at the tail of a sorted population.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
