//! Attainable score range estimation.
//!
//! Callers building constraint selectors (min/max sliders, sanity checks)
//! need to know roughly what score values a catalog can produce. The
//! estimate combines per-slot stat extremes, so it bounds every real
//! build but is not necessarily tight: the parts achieving each extreme
//! may not be combinable.

use super::formula::{coefficients, ScoreKind};
use crate::catalog::{PartCatalog, Slot, StatKey};

/// Inclusive estimated bounds for one category's unweighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

/// Estimated per-category score ranges for a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRanges([ScoreRange; ScoreKind::ALL.len()]);

impl ScoreRanges {
    /// Returns the estimated range for a category.
    pub fn get(&self, kind: ScoreKind) -> ScoreRange {
        self.0[kind as usize]
    }
}

/// Estimates the unweighted score range per category for all builds a
/// catalog can produce.
///
/// Ranges are computed before priority weighting so they stay meaningful
/// whatever levels the player later picks. Every legal build's scores lie
/// within the returned bounds; the bounds themselves may not be attained.
pub fn estimate_score_ranges(catalog: &PartCatalog) -> ScoreRanges {
    let mut ranges = [ScoreRange { min: 0.0, max: 0.0 }; ScoreKind::ALL.len()];
    for kind in ScoreKind::ALL {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for &(stat, coeff) in coefficients(kind) {
            let (stat_min, stat_max) = stat_total_bounds(catalog, stat);
            // A negative coefficient swaps which extreme contributes where.
            if coeff >= 0.0 {
                lo += coeff * stat_min;
                hi += coeff * stat_max;
            } else {
                lo += coeff * stat_max;
                hi += coeff * stat_min;
            }
        }
        ranges[kind as usize] = ScoreRange { min: lo, max: hi };
    }
    ScoreRanges(ranges)
}

/// Bounds on a single stat's build total: per-slot extremes summed, with
/// the trinket contribution taken over exact unordered pair sums.
fn stat_total_bounds(catalog: &PartCatalog, stat: StatKey) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    for slot in [Slot::Engine, Slot::Exhaust, Slot::Suspension, Slot::Gearbox] {
        let values = catalog.parts(slot).iter().map(|p| p.stats.get(stat));
        min += values.clone().fold(f64::INFINITY, f64::min);
        max += values.fold(f64::NEG_INFINITY, f64::max);
    }
    let (pair_min, pair_max) = trinket_pair_bounds(catalog, stat);
    (min + pair_min, max + pair_max)
}

fn trinket_pair_bounds(catalog: &PartCatalog, stat: StatKey) -> (f64, f64) {
    let pool = catalog.parts(Slot::Trinket);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let sum = pool[i].stats.get(stat) + pool[j].stats.get(stat);
            min = min.min(sum);
            max = max.max(sum);
        }
    }
    (min, max)
}
