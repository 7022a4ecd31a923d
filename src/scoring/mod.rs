//! Build scoring under player priorities.
//!
//! Maps a build's aggregated raw stats to the four category scores
//! (Race, Coin, Drift, Combat):
//!
//! - each category is a fixed linear combination of raw stats
//!   (tuning data in [`coefficients`]);
//! - the player's Low/Medium/High priority per category scales its
//!   contribution through a [`MultiplierTable`];
//! - optional raw-stat overrides blend individual stats straight into the
//!   total score.
//!
//! Scoring is pure: the same totals and weights always produce a
//! bit-identical [`ScoreVector`], which is what makes the evaluation
//! stage safe to parallelize. [`estimate_score_ranges`] bounds the scores
//! a catalog can produce, for constraint-building callers.

mod formula;
mod ranges;
mod weights;

pub use formula::{coefficients, raw_bonus, score, ScoreKind, ScoreVector};
pub use ranges::{estimate_score_ranges, ScoreRange, ScoreRanges};
pub use weights::{MultiplierTable, PriorityLevel, PriorityWeights};
