//! Pipeline orchestration.
//!
//! [`Optimizer`] wires the stages together in fixed order:
//! enumerate → score → filter → rank. Input validation happens before
//! the enumeration starts, component errors propagate unchanged, and
//! the run touches nothing outside its arguments: no storage, no
//! network, no display.

use super::config::OptimizerConfig;
use crate::catalog::PartCatalog;
use crate::combinator::{Build, BuildEnumerator};
use crate::constraint::Constraint;
use crate::error::{EngineError, Result};
use crate::ranking::{rank, RankedResult, ScoredBuild};
use crate::scoring::{raw_bonus, score, PriorityWeights};
use std::time::Instant;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds evaluated per batch. Batches bound the time-limit check
/// granularity and, under the `parallel` feature, the work handed to
/// rayon at a time.
const BATCH_SIZE: usize = 1024;

/// The optimization pipeline entry point.
///
/// # Examples
///
/// ```
/// use gearopt::catalog::PartCatalog;
/// use gearopt::constraint::Constraint;
/// use gearopt::pipeline::{Optimizer, OptimizerConfig};
/// use gearopt::scoring::{PriorityLevel, PriorityWeights};
///
/// // An owned-inventory subset of the stock catalog.
/// let catalog = PartCatalog::stock().filter(|p| p.name.starts_with('S'))?;
/// let weights = PriorityWeights::default().with_race(PriorityLevel::High);
/// let optimizer = Optimizer::with_config(OptimizerConfig::default().with_top_n(3));
///
/// let result = optimizer.optimize(&catalog, &weights, &Constraint::Simple)?;
/// assert_eq!(result.len(), 3);
/// # Ok::<(), gearopt::error::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with an explicit configuration.
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Runs the full pipeline over a catalog.
    ///
    /// Evaluates every legal build, keeps those passing the constraint,
    /// and returns them ranked. Fails fast: malformed weights are
    /// rejected before the first build is enumerated, and any stage
    /// error aborts the run unchanged. On timeout no partial results are
    /// returned.
    pub fn optimize(
        &self,
        catalog: &PartCatalog,
        weights: &PriorityWeights,
        constraint: &Constraint,
    ) -> Result<RankedResult> {
        weights.validate()?;

        let started = Instant::now();
        let mut enumerator = BuildEnumerator::new(catalog);
        let mut batch: Vec<Build> = Vec::with_capacity(BATCH_SIZE);
        let mut survivors: Vec<ScoredBuild> = Vec::new();
        let mut candidates = 0u64;

        loop {
            batch.clear();
            batch.extend(enumerator.by_ref().take(BATCH_SIZE));
            if batch.is_empty() {
                break;
            }
            if let Some(limit_ms) = self.config.time_limit_ms {
                if started.elapsed().as_millis() as u64 >= limit_ms {
                    return Err(EngineError::TimedOut { limit_ms });
                }
            }
            candidates += batch.len() as u64;
            self.evaluate_batch(&batch, catalog, weights, constraint, &mut survivors)?;
        }

        let survivor_count = survivors.len();
        let mut result = rank(survivors);
        if let Some(n) = self.config.top_n {
            result.truncate(n);
        }
        debug!(
            candidates,
            survivors = survivor_count,
            ranked = result.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "optimization complete"
        );
        Ok(result)
    }

    fn evaluate_batch(
        &self,
        batch: &[Build],
        catalog: &PartCatalog,
        weights: &PriorityWeights,
        constraint: &Constraint,
        survivors: &mut Vec<ScoredBuild>,
    ) -> Result<()> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            let evaluated = batch
                .par_iter()
                .map(|&build| evaluate(build, catalog, weights, constraint))
                .collect::<Result<Vec<_>>>()?;
            survivors.extend(evaluated.into_iter().flatten());
            return Ok(());
        }

        for &build in batch {
            if let Some(scored) = evaluate(build, catalog, weights, constraint)? {
                survivors.push(scored);
            }
        }
        Ok(())
    }
}

/// Scores one build and applies the constraint filter.
fn evaluate(
    build: Build,
    catalog: &PartCatalog,
    weights: &PriorityWeights,
    constraint: &Constraint,
) -> Result<Option<ScoredBuild>> {
    let totals = build.total_stats(catalog);
    let scores = score(&totals, weights)?;
    if !constraint.passes(&scores) {
        return Ok(None);
    }
    let total = scores.total() + raw_bonus(&totals, weights)?;
    Ok(Some(ScoredBuild {
        build,
        scores,
        total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Part, Slot, StatKey};
    use crate::constraint::ScoreBounds;
    use crate::scoring::{MultiplierTable, PriorityLevel, ScoreKind};

    /// 2 engines, 1 exhaust, 1 suspension, 1 gearbox, 3 trinkets:
    /// six legal builds, all stats non-negative.
    fn scenario_catalog() -> PartCatalog {
        PartCatalog::new(vec![
            Part::new(Slot::Engine, "Slow Engine", &[(StatKey::Speed, 0.5)]),
            Part::new(Slot::Engine, "Fast Engine", &[(StatKey::Speed, 3.0)]),
            Part::new(Slot::Exhaust, "Exhaust", &[(StatKey::CoinBoostSpd, 2.0)]),
            Part::new(Slot::Suspension, "Suspension", &[(StatKey::Steer, 1.0)]),
            Part::new(Slot::Gearbox, "Gearbox", &[(StatKey::T1, 0.5)]),
            Part::new(Slot::Trinket, "Trinket A", &[(StatKey::UltCharge, 1.0)]),
            Part::new(Slot::Trinket, "Trinket B", &[(StatKey::UltCharge, 2.0)]),
            Part::new(Slot::Trinket, "Trinket C", &[(StatKey::Speed, 1.0)]),
        ])
        .unwrap()
    }

    fn race_weights() -> PriorityWeights {
        PriorityWeights::default().with_race(PriorityLevel::High)
    }

    #[test]
    fn test_end_to_end_scenario() {
        let catalog = scenario_catalog();
        let result = Optimizer::new()
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap();

        // All six builds pass the simple constraint.
        assert_eq!(result.len(), 6);

        // The fast engine dominates under High race priority.
        assert_eq!(result.entries()[0].build.engine, 1);

        // Totals are non-increasing.
        for pair in result.entries().windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let catalog = scenario_catalog();
        let optimizer = Optimizer::new();
        let a = optimizer
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap();
        let b = optimizer
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_weights_rejected_before_enumeration() {
        let catalog = scenario_catalog();
        let weights = race_weights().with_table(MultiplierTable {
            low: 2.0,
            medium: 1.0,
            high: 4.0,
        });
        let err = Optimizer::new()
            .optimize(&catalog, &weights, &Constraint::Simple)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeight(_)));
    }

    #[test]
    fn test_zero_time_limit_times_out() {
        let catalog = scenario_catalog();
        let optimizer = Optimizer::with_config(OptimizerConfig::default().with_time_limit_ms(0));
        let err = optimizer
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap_err();
        assert_eq!(err, EngineError::TimedOut { limit_ms: 0 });
    }

    #[test]
    fn test_top_n_truncates_after_global_sort() {
        let catalog = scenario_catalog();
        let all = Optimizer::new()
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap();
        let top = Optimizer::with_config(OptimizerConfig::default().with_top_n(2))
            .optimize(&catalog, &race_weights(), &Constraint::Simple)
            .unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top.entries(), &all.entries()[..2]);
    }

    #[test]
    fn test_advanced_constraint_filters() {
        let catalog = scenario_catalog();
        // Fast Engine gives Race = 4.0 * 2.0 * (3.0 + pair speed) >= 24;
        // Slow Engine tops out at 4.0 * 2.0 * 1.5 = 12.
        let constraint = Constraint::Advanced(
            ScoreBounds::default().with_min(ScoreKind::Race, 20.0),
        );
        let result = Optimizer::new()
            .optimize(&catalog, &race_weights(), &constraint)
            .unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|e| e.build.engine == 1));
    }

    #[test]
    fn test_no_survivors_is_empty_not_error() {
        let catalog = scenario_catalog();
        let constraint = Constraint::Advanced(
            ScoreBounds::default().with_min(ScoreKind::Race, 1e9),
        );
        let result = Optimizer::new()
            .optimize(&catalog, &race_weights(), &constraint)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_raw_override_changes_ranking() {
        let catalog = scenario_catalog();
        // Without overrides, pair (A, B) leads on combat charge but race
        // priority favors trinket C's speed.
        let weights = PriorityWeights::default()
            .with_race(PriorityLevel::Low)
            .with_raw_override(StatKey::UltCharge, PriorityLevel::High);
        let result = Optimizer::new()
            .optimize(&catalog, &weights, &Constraint::Simple)
            .unwrap();
        // Highest UltCharge pair is (A, B) = 3.0, bonus 12.0.
        assert_eq!(result.entries()[0].build.trinkets, (0, 1));
        assert!((result.entries()[0].total - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_undersized_trinket_pool_fails_before_scoring() {
        let err = PartCatalog::new(vec![
            Part::new(Slot::Engine, "E", &[]),
            Part::new(Slot::Exhaust, "X", &[]),
            Part::new(Slot::Suspension, "S", &[]),
            Part::new(Slot::Gearbox, "G", &[]),
            Part::new(Slot::Trinket, "T", &[]),
        ])
        .unwrap_err();
        // The catalog cannot even be constructed, so no scoring happens.
        assert!(matches!(
            err,
            EngineError::CatalogEmpty {
                slot: Slot::Trinket,
                ..
            }
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = PartCatalog::stock()
            .filter(|p| p.name.starts_with(['A', 'B', 'C', 'D', 'E', 'F']))
            .unwrap();
        let weights = race_weights().with_coin(PriorityLevel::Medium);

        let sequential = Optimizer::new()
            .optimize(&catalog, &weights, &Constraint::Simple)
            .unwrap();
        let parallel = Optimizer::with_config(OptimizerConfig::default().with_parallel(true))
            .optimize(&catalog, &weights, &Constraint::Simple)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
