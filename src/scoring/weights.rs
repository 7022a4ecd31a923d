//! Priority weighting.
//!
//! Players express what matters as a Low/Medium/High level per score
//! category; levels map to numeric multipliers through a
//! [`MultiplierTable`]. An optional set of raw-stat overrides lets a
//! specific stat (say, `TrickSpd`) contribute to the total on top of the
//! four categories.

use super::formula::ScoreKind;
use crate::catalog::StatKey;
use crate::error::{EngineError, Result};

/// Player-chosen importance level for a score category or raw stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
}

impl PriorityLevel {
    /// All levels, ascending.
    pub const ALL: [PriorityLevel; 3] = [
        PriorityLevel::Low,
        PriorityLevel::Medium,
        PriorityLevel::High,
    ];
}

/// Numeric multiplier per priority level.
///
/// The stock table is `{Low: 0.0, Medium: 1.0, High: 4.0}`: a Low
/// category contributes nothing, High dominates. Custom tables must be
/// finite, non-negative, and strictly increasing Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiplierTable {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self {
            low: 0.0,
            medium: 1.0,
            high: 4.0,
        }
    }
}

impl MultiplierTable {
    /// Returns the multiplier for a level.
    pub fn multiplier(&self, level: PriorityLevel) -> f64 {
        match level {
            PriorityLevel::Low => self.low,
            PriorityLevel::Medium => self.medium,
            PriorityLevel::High => self.high,
        }
    }

    /// Validates the table invariants.
    pub fn validate(&self) -> Result<()> {
        let values = [self.low, self.medium, self.high];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidWeight(
                "multiplier table contains a non-finite value".into(),
            ));
        }
        if self.low < 0.0 {
            return Err(EngineError::InvalidWeight(format!(
                "multipliers must be non-negative, got Low = {}",
                self.low
            )));
        }
        if !(self.low < self.medium && self.medium < self.high) {
            return Err(EngineError::InvalidWeight(format!(
                "multipliers must be strictly increasing, got {} / {} / {}",
                self.low, self.medium, self.high
            )));
        }
        Ok(())
    }
}

/// Complete priority weighting for an optimization run.
///
/// Read-only for the run's duration; constructed fresh per invocation.
///
/// # Examples
///
/// ```
/// use gearopt::scoring::{PriorityLevel, PriorityWeights};
/// use gearopt::catalog::StatKey;
///
/// let weights = PriorityWeights::default()
///     .with_race(PriorityLevel::High)
///     .with_coin(PriorityLevel::Low)
///     .with_raw_override(StatKey::TrickSpd, PriorityLevel::Medium);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityWeights {
    /// Race priority.
    pub race: PriorityLevel,
    /// Coin priority.
    pub coin: PriorityLevel,
    /// Drift priority.
    pub drift: PriorityLevel,
    /// Combat priority.
    pub combat: PriorityLevel,
    /// Level-to-multiplier mapping shared by all categories and overrides.
    pub table: MultiplierTable,
    /// Raw stats blended directly into the total score, with their levels.
    pub raw_overrides: Vec<(StatKey, PriorityLevel)>,
}

impl Default for PriorityWeights {
    /// Race at Medium, everything else Low: the usual starting point.
    fn default() -> Self {
        Self {
            race: PriorityLevel::Medium,
            coin: PriorityLevel::Low,
            drift: PriorityLevel::Low,
            combat: PriorityLevel::Low,
            table: MultiplierTable::default(),
            raw_overrides: Vec::new(),
        }
    }
}

impl PriorityWeights {
    /// Sets the Race priority.
    pub fn with_race(mut self, level: PriorityLevel) -> Self {
        self.race = level;
        self
    }

    /// Sets the Coin priority.
    pub fn with_coin(mut self, level: PriorityLevel) -> Self {
        self.coin = level;
        self
    }

    /// Sets the Drift priority.
    pub fn with_drift(mut self, level: PriorityLevel) -> Self {
        self.drift = level;
        self
    }

    /// Sets the Combat priority.
    pub fn with_combat(mut self, level: PriorityLevel) -> Self {
        self.combat = level;
        self
    }

    /// Replaces the multiplier table.
    pub fn with_table(mut self, table: MultiplierTable) -> Self {
        self.table = table;
        self
    }

    /// Adds a raw-stat override blended into the total score.
    pub fn with_raw_override(mut self, stat: StatKey, level: PriorityLevel) -> Self {
        self.raw_overrides.push((stat, level));
        self
    }

    /// Returns the level chosen for a category.
    pub fn level(&self, kind: ScoreKind) -> PriorityLevel {
        match kind {
            ScoreKind::Race => self.race,
            ScoreKind::Coin => self.coin,
            ScoreKind::Drift => self.drift,
            ScoreKind::Combat => self.combat,
        }
    }

    /// Returns the numeric multiplier for a category.
    pub fn multiplier(&self, kind: ScoreKind) -> f64 {
        self.table.multiplier(self.level(kind))
    }

    /// Validates the weighting before an optimization run.
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        for (i, &(stat, _)) in self.raw_overrides.iter().enumerate() {
            if self.raw_overrides[..i].iter().any(|&(s, _)| s == stat) {
                return Err(EngineError::InvalidWeight(format!(
                    "duplicate raw-stat override for {stat}"
                )));
            }
        }
        Ok(())
    }
}
