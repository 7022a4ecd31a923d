//! Exhaustive kart build optimization engine.
//!
//! Evaluates every legal combination of equipment parts for a kart build,
//! scores each combination against player-chosen priorities, filters on
//! score constraints, and returns a ranked list:
//!
//! - **Catalog**: part pools per equipment slot (Engine, Exhaust,
//!   Suspension, Gearbox, Trinket) with raw stat vectors, validated at
//!   construction. Ships the stock parts database.
//! - **Combinator**: lazy, restartable enumeration of all legal builds —
//!   one part per slot crossed with every unordered pair of distinct
//!   trinkets, in deterministic order.
//! - **Scoring**: pure mapping from a build's aggregated raw stats to the
//!   four category scores (Race, Coin, Drift, Combat) under Low/Medium/High
//!   priority weighting, with optional raw-stat weighting.
//! - **Constraint**: simple (non-negative) or advanced (per-score min/max)
//!   filtering of scored builds.
//! - **Ranking**: descending order by total weighted score with a stable,
//!   enumeration-order tie-break.
//! - **Pipeline**: one entry point wiring the stages together, with
//!   optional top-N truncation, wall-clock limit, and (behind the
//!   `parallel` feature) rayon-based evaluation.
//!
//! # Architecture
//!
//! The engine is a pure, stateless function of
//! (catalog, weights, constraint) → ranked results. Nothing persists
//! between invocations, no I/O is performed, and identical inputs always
//! produce identical output — including tie ordering. Display, CSV export,
//! and catalog storage belong to consumers.

pub mod catalog;
pub mod combinator;
pub mod constraint;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
