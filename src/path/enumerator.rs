//! Counting and canonical generation of monotonic lattice paths.
//!
//! A path with `dx` right moves and `dy` up moves is identified by the set of
//! slots (out of `dx + dy`) holding its right moves. Walking those slot sets
//! with `Itertools::combinations` over `0..dx + dy` yields them in ascending
//! lexicographic order, which is the canonical path order used everywhere.

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::error::PathError;
use super::moves::LatticePath;
use super::point::{Point, StepVector};

/// Totals at or below this are listed in full.
pub const DEFAULT_SHOW_ALL_THRESHOLD: u64 = 10_000;
/// Upper bound on a partial listing when the total exceeds the threshold.
pub const DEFAULT_PARTIAL_LIMIT: usize = 1_000;

/// Display bounds applied by `count_and_list` and its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// T1: inclusive upper bound on the total for which every path is generated.
    pub show_all_threshold: u64,
    /// T2: cap on how many paths a partial listing may contain.
    pub partial_limit: usize,
}

impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            show_all_threshold: DEFAULT_SHOW_ALL_THRESHOLD,
            partial_limit: DEFAULT_PARTIAL_LIMIT,
        }
    }
}

impl EnumerationLimits {
    /// Clamps a requested sample size to the partial limit.
    pub fn clamp_sample(&self, requested: usize) -> usize {
        requested.min(self.partial_limit)
    }
}

/// Result of `count_and_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathListing {
    pub steps: StepVector,
    /// Exact number of distinct paths.
    pub total: BigUint,
    /// Every path in canonical order, or empty when `total` exceeded the threshold.
    pub paths: Vec<LatticePath>,
}

impl PathListing {
    /// True when paths exist but were not generated because of the threshold.
    pub fn is_truncated(&self) -> bool {
        self.paths.is_empty() && !self.total.is_zero()
    }
}

/// Exact binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 0..k {
        // Each partial product is C(n, i + 1), so the division is exact.
        result *= BigUint::from(n - i);
        result /= BigUint::from(i + 1);
    }
    result
}

/// Number of monotonic paths for `steps`; zero for the degenerate empty vector.
pub fn count_paths(steps: StepVector) -> BigUint {
    if steps.is_empty() {
        return BigUint::zero();
    }
    binomial(steps.len(), steps.right)
}

/// Counts the paths from `origin` to `destination` and lists all of them when
/// the total is at most `limits.show_all_threshold`.
///
/// # Errors
/// `PathError::InvalidRegion` when the destination is left of or below the
/// origin. No generation work happens in that case.
pub fn count_and_list(
    origin: Point,
    destination: Point,
    limits: &EnumerationLimits,
) -> Result<PathListing, PathError> {
    let steps = StepVector::between(origin, destination)?;

    if steps.is_empty() {
        return Ok(PathListing {
            steps,
            total: BigUint::zero(),
            paths: Vec::new(),
        });
    }

    let total = count_paths(steps);
    let paths = if total <= BigUint::from(limits.show_all_threshold) {
        generate_all(steps)
    } else {
        Vec::new()
    };

    Ok(PathListing {
        steps,
        total,
        paths,
    })
}

/// Every path for `steps` in canonical order.
pub fn generate_all(steps: StepVector) -> Vec<LatticePath> {
    enumerate_prefix(steps.right, steps.up, usize::MAX).collect()
}

/// Lazily yields at most `limit` paths with `dx` right and `dy` up moves, in
/// canonical order. Each call starts again from the first path.
pub fn enumerate_prefix(dx: usize, dy: usize, limit: usize) -> impl Iterator<Item = LatticePath> {
    let steps = StepVector::new(dx, dy);
    let len = steps.len();
    let limit = if steps.is_empty() { 0 } else { limit };

    (0..len)
        .combinations(dx)
        .take(limit)
        .map(move |rights| LatticePath::from_right_positions(len, &rights))
}
