//! Error types for the optimization engine.
//!
//! Every failure is detected eagerly (before enumeration where possible)
//! and propagated unchanged to the pipeline boundary. Nothing is retried:
//! the computation is deterministic, so a retry would reproduce the same
//! failure.

use crate::catalog::Slot;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A slot pool is too small to form any legal build.
    ///
    /// Non-trinket slots need at least one part; the trinket slot needs at
    /// least two distinct parts.
    #[error("{slot} pool has {count} usable part(s), need at least {required}")]
    CatalogEmpty {
        /// The offending slot.
        slot: Slot,
        /// Number of usable (distinct) parts found.
        count: usize,
        /// Minimum required for a legal build.
        required: usize,
    },

    /// Malformed priority weighting input.
    #[error("invalid priority weighting: {0}")]
    InvalidWeight(String),

    /// A constraint referenced a score name that does not exist.
    #[error("unknown score name: {0:?}")]
    UnknownScore(String),

    /// The caller-supplied time limit was exceeded.
    ///
    /// No partial results are returned; a truncated ranking would violate
    /// the total-ordering guarantee.
    #[error("optimization exceeded the {limit_ms} ms time limit")]
    TimedOut {
        /// The configured limit in milliseconds.
        limit_ms: u64,
    },

    /// A computed score term left the representable range (infinite or
    /// NaN). Scores are never silently clamped or wrapped.
    #[error("non-finite value computed for the {term} score")]
    NonFiniteScore {
        /// The category (or "raw-stat bonus") whose value became
        /// non-finite.
        term: &'static str,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
