//! Ranking of surviving builds.
//!
//! Sorts the builds that pass the constraint filter into the final
//! result order: descending by total weighted score, ties broken by the
//! enumerator's emission order so the ranking is reproducible run to run.

use crate::catalog::{PartCatalog, StatVector};
use crate::combinator::Build;
use crate::scoring::ScoreVector;
use std::cmp::Ordering;

/// A build together with its computed scores and total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBuild {
    /// The build's part selection.
    pub build: Build,
    /// The four priority-weighted category scores.
    pub scores: ScoreVector,
    /// Total weighted score: the four categories plus any raw-stat
    /// override bonus.
    pub total: f64,
}

/// The ordered outcome of an optimization run.
///
/// Entries are sorted descending by total; among equal totals the build
/// enumerated first ranks higher. Consumed (listed, expanded, exported)
/// by the caller and discarded; nothing persists between runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    entries: Vec<ScoredBuild>,
}

impl RankedResult {
    /// The ranked entries, best first.
    pub fn entries(&self) -> &[ScoredBuild] {
        &self.entries
    }

    /// Number of ranked builds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no build survived the constraint filter.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries, best first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredBuild> {
        self.entries.iter()
    }

    /// Keeps only the best `n` builds.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    /// Consumes the result, yielding the ranked entries.
    pub fn into_entries(self) -> Vec<ScoredBuild> {
        self.entries
    }

    /// Row-oriented view for tabular consumers: one row per build with
    /// resolved part names, the four scores, and the total.
    pub fn rows<'a>(&'a self, catalog: &'a PartCatalog) -> impl Iterator<Item = ResultRow<'a>> {
        self.entries.iter().enumerate().map(|(i, entry)| ResultRow {
            rank: i + 1,
            part_names: entry.build.part_names(catalog),
            scores: entry.scores,
            total: entry.total,
        })
    }
}

/// One row of a ranked listing: rank, part names in slot order
/// (trinkets last), scores, and total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow<'a> {
    pub rank: usize,
    pub part_names: [&'a str; 6],
    pub scores: ScoreVector,
    pub total: f64,
}

impl ScoredBuild {
    /// The build's aggregated raw stats, for per-build stat expansion.
    pub fn stat_totals(&self, catalog: &PartCatalog) -> StatVector {
        self.build.total_stats(catalog)
    }
}

/// Sorts scored builds into their final order.
///
/// Consumes the survivor list and returns a new ordered result; nothing
/// is mutated in place. The sort key is total descending; equal totals
/// keep enumeration order (stable by [`Build::ordinal`]), so the ranking
/// does not depend on how the survivors were collected — sequential and
/// parallel evaluation produce the same order.
pub fn rank(mut survivors: Vec<ScoredBuild>) -> RankedResult {
    survivors.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.build.ordinal.cmp(&b.build.ordinal))
    });
    RankedResult { entries: survivors }
}
