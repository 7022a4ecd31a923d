//! Category score formulas.
//!
//! Each category score is a fixed linear combination of a build's
//! aggregated raw stats, scaled by the category's priority multiplier.
//! The coefficient tables are tuning data taken from the community
//! scoring reference; changing them does not touch any contract here.

use super::weights::PriorityWeights;
use crate::catalog::{StatKey, StatVector};
use crate::error::{EngineError, Result};
use std::fmt;

/// One of the four score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreKind {
    Race,
    Coin,
    Drift,
    Combat,
}

impl ScoreKind {
    /// All categories, in display order.
    pub const ALL: [ScoreKind; 4] = [
        ScoreKind::Race,
        ScoreKind::Coin,
        ScoreKind::Drift,
        ScoreKind::Combat,
    ];

    /// Display name of this category.
    pub fn name(self) -> &'static str {
        match self {
            ScoreKind::Race => "Race",
            ScoreKind::Coin => "Coin",
            ScoreKind::Drift => "Drift",
            ScoreKind::Combat => "Combat",
        }
    }

    /// Looks up a category by name, case-insensitively.
    ///
    /// This is the entry point for externally supplied score names
    /// (constraint bounds from a UI or config file).
    pub fn from_name(name: &str) -> Option<ScoreKind> {
        ScoreKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-stat coefficients for the Race score.
const RACE_COEFFS: &[(StatKey, f64)] = &[
    (StatKey::Speed, 2.0),
    (StatKey::StartBoost, 1.5),
    (StatKey::SlipStreamSpd, 1.2),
    (StatKey::SlowAreaPenalty, -1.0),
];

/// Per-stat coefficients for the Coin score.
const COIN_COEFFS: &[(StatKey, f64)] = &[
    (StatKey::StartCoins, 1.0),
    (StatKey::MaxCoins, 2.0),
    (StatKey::CoinBoostSpd, 1.5),
    (StatKey::CoinBoostTime, 1.5),
];

/// Per-stat coefficients for the Drift score.
const DRIFT_COEFFS: &[(StatKey, f64)] = &[
    (StatKey::DriftSteer, 2.0),
    (StatKey::Steer, 1.5),
    (StatKey::AirDriftTime, 1.0),
];

/// Per-stat coefficients for the Combat score.
const COMBAT_COEFFS: &[(StatKey, f64)] = &[
    (StatKey::UltCharge, 2.0),
    (StatKey::Daze, 1.5),
    (StatKey::SlipStreamRadius, 1.0),
];

/// Returns the coefficient table for a category.
pub fn coefficients(kind: ScoreKind) -> &'static [(StatKey, f64)] {
    match kind {
        ScoreKind::Race => RACE_COEFFS,
        ScoreKind::Coin => COIN_COEFFS,
        ScoreKind::Drift => DRIFT_COEFFS,
        ScoreKind::Combat => COMBAT_COEFFS,
    }
}

/// The four category scores of one build, already priority-weighted.
///
/// Derived from a build's stat totals and a weighting; never stored
/// independently of its build.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreVector {
    pub race: f64,
    pub coin: f64,
    pub drift: f64,
    pub combat: f64,
}

impl ScoreVector {
    /// Returns one category's score.
    pub fn get(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Race => self.race,
            ScoreKind::Coin => self.coin,
            ScoreKind::Drift => self.drift,
            ScoreKind::Combat => self.combat,
        }
    }

    /// Sum of the four category scores.
    ///
    /// Each category is already priority-weighted, so this is the build's
    /// base total; raw-stat override bonuses are added on top by the
    /// caller.
    pub fn total(&self) -> f64 {
        self.race + self.coin + self.drift + self.combat
    }
}

/// Computes the four priority-weighted category scores for a build's
/// aggregated stat totals.
///
/// Pure and deterministic: identical `(totals, weights)` always produce a
/// bit-identical result. A score that leaves the representable range
/// (infinite or NaN input stats, for instance) is a
/// [`EngineError::NonFiniteScore`], never a silently clamped value.
pub fn score(totals: &StatVector, weights: &PriorityWeights) -> Result<ScoreVector> {
    let mut values = [0.0f64; ScoreKind::ALL.len()];
    for (i, &kind) in ScoreKind::ALL.iter().enumerate() {
        let base: f64 = coefficients(kind)
            .iter()
            .map(|&(stat, coeff)| coeff * totals.get(stat))
            .sum();
        let value = base * weights.multiplier(kind);
        if !value.is_finite() {
            return Err(EngineError::NonFiniteScore { term: kind.name() });
        }
        values[i] = value;
    }
    Ok(ScoreVector {
        race: values[0],
        coin: values[1],
        drift: values[2],
        combat: values[3],
    })
}

/// Computes the raw-stat override bonus for a build's stat totals.
///
/// Each override contributes `multiplier(level) · total(stat)` to the
/// build's total score, blended linearly on top of the four categories
/// without altering their definitions. Zero when no overrides are set.
pub fn raw_bonus(totals: &StatVector, weights: &PriorityWeights) -> Result<f64> {
    let mut bonus = 0.0f64;
    for &(stat, level) in &weights.raw_overrides {
        bonus += weights.table.multiplier(level) * totals.get(stat);
    }
    if !bonus.is_finite() {
        return Err(EngineError::NonFiniteScore {
            term: "raw-stat bonus",
        });
    }
    Ok(bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::weights::{MultiplierTable, PriorityLevel};

    fn totals() -> StatVector {
        StatVector::from_pairs(&[
            (StatKey::Speed, 2.0),
            (StatKey::StartBoost, 10.0),
            (StatKey::SlowAreaPenalty, 5.0),
            (StatKey::StartCoins, 3.0),
            (StatKey::MaxCoins, 4.0),
            (StatKey::DriftSteer, 1.0),
            (StatKey::Steer, 2.0),
            (StatKey::UltCharge, 5.0),
            (StatKey::Daze, -10.0),
        ])
    }

    fn all_medium() -> PriorityWeights {
        PriorityWeights::default()
            .with_race(PriorityLevel::Medium)
            .with_coin(PriorityLevel::Medium)
            .with_drift(PriorityLevel::Medium)
            .with_combat(PriorityLevel::Medium)
    }

    #[test]
    fn test_category_formulas() {
        let scores = score(&totals(), &all_medium()).unwrap();
        // Race = 2*2 + 1.5*10 + 1.2*0 - 5 = 14
        assert!((scores.race - 14.0).abs() < 1e-9);
        // Coin = 3 + 2*4 = 11
        assert!((scores.coin - 11.0).abs() < 1e-9);
        // Drift = 2*1 + 1.5*2 = 5
        assert!((scores.drift - 5.0).abs() < 1e-9);
        // Combat = 2*5 + 1.5*(-10) = -5
        assert!((scores.combat + 5.0).abs() < 1e-9);
        assert!((scores.total() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let weights = all_medium();
        let a = score(&totals(), &weights).unwrap();
        let b = score(&totals(), &weights).unwrap();
        // Bit-identical, not merely close.
        assert_eq!(a, b);
    }

    #[test]
    fn test_priority_scales_category() {
        let t = totals();
        let low = score(&t, &PriorityWeights::default().with_race(PriorityLevel::Low)).unwrap();
        let med = score(&t, &PriorityWeights::default().with_race(PriorityLevel::Medium)).unwrap();
        let high = score(&t, &PriorityWeights::default().with_race(PriorityLevel::High)).unwrap();
        // Race base is 14 (positive), so raising the level strictly raises it.
        assert!(low.race < med.race);
        assert!(med.race < high.race);
        // Other categories are untouched by the race level.
        assert!((low.coin - med.coin).abs() < 1e-12);
    }

    #[test]
    fn test_zero_stats_unaffected_by_level() {
        let empty = StatVector::ZERO;
        let low = score(&empty, &PriorityWeights::default().with_race(PriorityLevel::Low)).unwrap();
        let high =
            score(&empty, &PriorityWeights::default().with_race(PriorityLevel::High)).unwrap();
        assert!((low.race - high.race).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_reported() {
        let mut t = totals();
        t.set(StatKey::Speed, f64::INFINITY);
        let err = score(&t, &all_medium()).unwrap_err();
        assert_eq!(err, EngineError::NonFiniteScore { term: "Race" });
    }

    #[test]
    fn test_raw_bonus() {
        let t = StatVector::from_pairs(&[(StatKey::TrickSpd, 8.0)]);
        let weights =
            PriorityWeights::default().with_raw_override(StatKey::TrickSpd, PriorityLevel::High);
        // High multiplies by 4.0.
        assert!((raw_bonus(&t, &weights).unwrap() - 32.0).abs() < 1e-9);

        let none = PriorityWeights::default();
        assert!((raw_bonus(&t, &none).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_custom_table() {
        let weights = all_medium().with_table(MultiplierTable {
            low: 0.5,
            medium: 2.0,
            high: 3.0,
        });
        let scores = score(&totals(), &weights).unwrap();
        assert!((scores.race - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_kind_from_name() {
        assert_eq!(ScoreKind::from_name("race"), Some(ScoreKind::Race));
        assert_eq!(ScoreKind::from_name("Combat"), Some(ScoreKind::Combat));
        assert_eq!(ScoreKind::from_name("turbo"), None);
    }
}
