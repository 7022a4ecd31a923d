//! Score constraints.
//!
//! A constraint is a pure predicate over a build's [`ScoreVector`],
//! applied once per build after scoring. Bound sets built from external
//! score names are validated at construction, so a typo in a UI or
//! config file fails before any build is evaluated.

use crate::error::{EngineError, Result};
use crate::scoring::{ScoreKind, ScoreVector};

/// Optional inclusive min/max bounds per score category.
///
/// A missing bound leaves that side open. The default value bounds
/// nothing and accepts every score vector.
///
/// # Examples
///
/// ```
/// use gearopt::constraint::ScoreBounds;
/// use gearopt::scoring::ScoreKind;
///
/// let bounds = ScoreBounds::default()
///     .with_min(ScoreKind::Race, 10.0)
///     .with_range(ScoreKind::Combat, -5.0, 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBounds {
    bounds: [(Option<f64>, Option<f64>); ScoreKind::ALL.len()],
}

impl ScoreBounds {
    /// Sets the inclusive lower bound for a category.
    pub fn with_min(mut self, kind: ScoreKind, min: f64) -> Self {
        self.bounds[kind as usize].0 = Some(min);
        self
    }

    /// Sets the inclusive upper bound for a category.
    pub fn with_max(mut self, kind: ScoreKind, max: f64) -> Self {
        self.bounds[kind as usize].1 = Some(max);
        self
    }

    /// Sets both bounds for a category.
    pub fn with_range(self, kind: ScoreKind, min: f64, max: f64) -> Self {
        self.with_min(kind, min).with_max(kind, max)
    }

    /// Builds bounds from externally supplied `(name, min, max)` rows.
    ///
    /// Names are matched case-insensitively against the four category
    /// names; anything else is an [`EngineError::UnknownScore`]. This is
    /// where constraint input from a UI or config file enters the engine.
    pub fn from_named<S: AsRef<str>>(
        rows: impl IntoIterator<Item = (S, Option<f64>, Option<f64>)>,
    ) -> Result<Self> {
        let mut bounds = ScoreBounds::default();
        for (name, min, max) in rows {
            let kind = ScoreKind::from_name(name.as_ref())
                .ok_or_else(|| EngineError::UnknownScore(name.as_ref().to_string()))?;
            bounds.bounds[kind as usize] = (min, max);
        }
        Ok(bounds)
    }

    /// Returns the bounds for a category.
    pub fn get(&self, kind: ScoreKind) -> (Option<f64>, Option<f64>) {
        self.bounds[kind as usize]
    }

    fn contains(&self, scores: &ScoreVector) -> bool {
        ScoreKind::ALL.iter().all(|&kind| {
            let (min, max) = self.get(kind);
            let value = scores.get(kind);
            min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
        })
    }
}

/// A filter rejecting builds whose scores fall outside acceptable bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// All four category scores must be non-negative.
    Simple,
    /// Explicit per-category inclusive bounds.
    Advanced(ScoreBounds),
}

impl Constraint {
    /// Whether a score vector satisfies this constraint.
    pub fn passes(&self, scores: &ScoreVector) -> bool {
        match self {
            Constraint::Simple => ScoreKind::ALL.iter().all(|&k| scores.get(k) >= 0.0),
            Constraint::Advanced(bounds) => bounds.contains(scores),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(race: f64, coin: f64, drift: f64, combat: f64) -> ScoreVector {
        ScoreVector {
            race,
            coin,
            drift,
            combat,
        }
    }

    #[test]
    fn test_simple_accepts_non_negative() {
        let c = Constraint::Simple;
        assert!(c.passes(&scores(0.0, 0.0, 0.0, 0.0)));
        assert!(c.passes(&scores(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_simple_rejects_any_negative() {
        let c = Constraint::Simple;
        assert!(!c.passes(&scores(-0.001, 1.0, 1.0, 1.0)));
        assert!(!c.passes(&scores(1.0, 1.0, 1.0, -5.0)));
    }

    #[test]
    fn test_advanced_bounds_inclusive() {
        let c = Constraint::Advanced(ScoreBounds::default().with_range(ScoreKind::Race, 10.0, 50.0));
        assert!(c.passes(&scores(10.0, -100.0, 0.0, 0.0)));
        assert!(c.passes(&scores(50.0, 0.0, 0.0, 0.0)));
        assert!(!c.passes(&scores(9.0, 0.0, 0.0, 0.0)));
        assert!(!c.passes(&scores(51.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_missing_bound_is_unbounded() {
        let c = Constraint::Advanced(ScoreBounds::default().with_min(ScoreKind::Coin, 0.0));
        assert!(c.passes(&scores(-1e9, 0.0, -1e9, 1e9)));
        assert!(!c.passes(&scores(0.0, -0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_default_bounds_accept_everything() {
        let c = Constraint::Advanced(ScoreBounds::default());
        assert!(c.passes(&scores(-1e12, 1e12, 0.0, -42.0)));
    }

    #[test]
    fn test_from_named() {
        let bounds = ScoreBounds::from_named([
            ("race", Some(10.0), Some(50.0)),
            ("Combat", None, Some(0.0)),
        ])
        .unwrap();
        assert_eq!(bounds.get(ScoreKind::Race), (Some(10.0), Some(50.0)));
        assert_eq!(bounds.get(ScoreKind::Combat), (None, Some(0.0)));
        assert_eq!(bounds.get(ScoreKind::Drift), (None, None));
    }

    #[test]
    fn test_from_named_unknown_score() {
        let err = ScoreBounds::from_named([("turbo", Some(0.0), None)]).unwrap_err();
        assert_eq!(err, EngineError::UnknownScore("turbo".into()));
    }
}
