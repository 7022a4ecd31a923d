//! Final ordering of surviving builds.
//!
//! Total weighted score is the sum of the four priority-weighted
//! category scores plus any raw-stat bonus. Sorting is descending and
//! stable: equal totals rank in enumeration order, making results
//! reproducible regardless of evaluation strategy.

mod ranker;

pub use ranker::{rank, RankedResult, ResultRow, ScoredBuild};
