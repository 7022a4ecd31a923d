//! Part, slot, and raw-stat types.
//!
//! A [`Part`] is identified by its [`Slot`] and name and carries a dense
//! [`StatVector`] of raw game stats. Parts are immutable once loaded;
//! the catalog owns them for the engine's lifetime.

use std::fmt;
use std::ops::{Add, AddAssign};

/// One of the five equipment slots a build must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Engine,
    Exhaust,
    Suspension,
    Gearbox,
    /// Trinkets are special: a build carries two distinct trinkets.
    Trinket,
}

impl Slot {
    /// All slots, in build order.
    pub const ALL: [Slot; 5] = [
        Slot::Engine,
        Slot::Exhaust,
        Slot::Suspension,
        Slot::Gearbox,
        Slot::Trinket,
    ];

    /// Display name of this slot.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Engine => "Engine",
            Slot::Exhaust => "Exhaust",
            Slot::Suspension => "Suspension",
            Slot::Gearbox => "Gearbox",
            Slot::Trinket => "Trinket",
        }
    }

    /// Minimum pool size for a legal build: two distinct trinkets, one of
    /// everything else.
    pub fn min_pool_size(self) -> usize {
        match self {
            Slot::Trinket => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw game stat carried by parts.
///
/// The set and order mirror the game's stat table; [`StatVector`] is
/// indexed by these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKey {
    Speed,
    StartBoost,
    SlipStreamSpd,
    SlowAreaPenalty,
    StartCoins,
    MaxCoins,
    CoinBoostSpd,
    CoinBoostTime,
    DriftSteer,
    Steer,
    AirDriftTime,
    UltCharge,
    Daze,
    SlipStreamRadius,
    TrickSpd,
    BoostPads,
    MaxCoinsSpd,
    SlipTime,
    UltStart,
    DriftRate,
    T1,
    T2,
    T3,
}

impl StatKey {
    /// Number of distinct raw stats.
    pub const COUNT: usize = 23;

    /// All stat keys, in vector index order.
    pub const ALL: [StatKey; StatKey::COUNT] = [
        StatKey::Speed,
        StatKey::StartBoost,
        StatKey::SlipStreamSpd,
        StatKey::SlowAreaPenalty,
        StatKey::StartCoins,
        StatKey::MaxCoins,
        StatKey::CoinBoostSpd,
        StatKey::CoinBoostTime,
        StatKey::DriftSteer,
        StatKey::Steer,
        StatKey::AirDriftTime,
        StatKey::UltCharge,
        StatKey::Daze,
        StatKey::SlipStreamRadius,
        StatKey::TrickSpd,
        StatKey::BoostPads,
        StatKey::MaxCoinsSpd,
        StatKey::SlipTime,
        StatKey::UltStart,
        StatKey::DriftRate,
        StatKey::T1,
        StatKey::T2,
        StatKey::T3,
    ];

    /// The stat's name as it appears in the game data.
    pub fn name(self) -> &'static str {
        match self {
            StatKey::Speed => "Speed",
            StatKey::StartBoost => "StartBoost",
            StatKey::SlipStreamSpd => "SlipStreamSpd",
            StatKey::SlowAreaPenalty => "SlowAreaPenalty",
            StatKey::StartCoins => "StartCoins",
            StatKey::MaxCoins => "MaxCoins",
            StatKey::CoinBoostSpd => "CoinBoostSpd",
            StatKey::CoinBoostTime => "CoinBoostTime",
            StatKey::DriftSteer => "DriftSteer",
            StatKey::Steer => "Steer",
            StatKey::AirDriftTime => "AirDriftTime",
            StatKey::UltCharge => "UltCharge",
            StatKey::Daze => "Daze",
            StatKey::SlipStreamRadius => "SlipStreamRadius",
            StatKey::TrickSpd => "TrickSpd",
            StatKey::BoostPads => "BoostPads",
            StatKey::MaxCoinsSpd => "MaxCoinsSpd",
            StatKey::SlipTime => "SlipTime",
            StatKey::UltStart => "UltStart",
            StatKey::DriftRate => "DriftRate",
            StatKey::T1 => "T1",
            StatKey::T2 => "T2",
            StatKey::T3 => "T3",
        }
    }

    /// Looks up a stat key by its game-data name.
    pub fn from_name(name: &str) -> Option<StatKey> {
        StatKey::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dense vector of raw stat values, indexed by [`StatKey`].
///
/// Stats absent from a part's game data are zero. Addition is
/// elementwise, which is exactly how a build aggregates its parts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatVector([f64; StatKey::COUNT]);

impl StatVector {
    /// The all-zero vector.
    pub const ZERO: StatVector = StatVector([0.0; StatKey::COUNT]);

    /// Builds a vector from sparse (key, value) pairs.
    ///
    /// Later duplicates overwrite earlier ones, matching last-wins map
    /// semantics in the game data.
    pub fn from_pairs(pairs: &[(StatKey, f64)]) -> Self {
        let mut v = StatVector::ZERO;
        for &(key, value) in pairs {
            v.0[key as usize] = value;
        }
        v
    }

    /// Returns the value for a stat.
    pub fn get(&self, key: StatKey) -> f64 {
        self.0[key as usize]
    }

    /// Sets the value for a stat.
    pub fn set(&mut self, key: StatKey, value: f64) {
        self.0[key as usize] = value;
    }

    /// Iterates over the stats with non-zero values, in index order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        StatKey::ALL
            .iter()
            .map(move |&k| (k, self.get(k)))
            .filter(|&(_, v)| v != 0.0)
    }
}

impl Default for StatVector {
    fn default() -> Self {
        StatVector::ZERO
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(mut self, rhs: StatVector) -> StatVector {
        self += rhs;
        self
    }
}

impl AddAssign for StatVector {
    fn add_assign(&mut self, rhs: StatVector) {
        for i in 0..StatKey::COUNT {
            self.0[i] += rhs.0[i];
        }
    }
}

/// One equipment part: slot, name, and raw stats.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    /// The slot this part fits.
    pub slot: Slot,
    /// Display name, unique within its slot.
    pub name: String,
    /// Raw stat contributions.
    pub stats: StatVector,
}

impl Part {
    /// Creates a part from sparse stat pairs.
    pub fn new(slot: Slot, name: impl Into<String>, stats: &[(StatKey, f64)]) -> Self {
        Self {
            slot,
            name: name.into(),
            stats: StatVector::from_pairs(stats),
        }
    }
}
