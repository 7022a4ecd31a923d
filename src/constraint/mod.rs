//! Constraint filtering of scored builds.
//!
//! Constraints come in two shapes: `Simple` (every category score
//! non-negative) and `Advanced` (explicit inclusive min/max per
//! category). Both are pure predicates; bound sets referencing score
//! names are validated when constructed, never per build.

mod filter;

pub use filter::{Constraint, ScoreBounds};
