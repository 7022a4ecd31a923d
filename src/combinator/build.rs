//! A single build candidate.

use crate::catalog::{PartCatalog, Slot, StatVector};

/// One complete, legal selection of parts: a pool index per non-trinket
/// slot plus an unordered pair of distinct trinket indices.
///
/// Builds reference parts by catalog index and are only meaningful
/// together with the catalog that produced them. The trinket pair is
/// stored with `trinkets.0 < trinkets.1`, so `{A, B}` and `{B, A}` are
/// the same value and each pair appears exactly once per enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    /// Engine pool index.
    pub engine: usize,
    /// Exhaust pool index.
    pub exhaust: usize,
    /// Suspension pool index.
    pub suspension: usize,
    /// Gearbox pool index.
    pub gearbox: usize,
    /// Trinket pool indices, ascending.
    pub trinkets: (usize, usize),
    /// Position in the enumeration order. Later stages break score ties
    /// by this value, which keeps rankings reproducible.
    pub ordinal: usize,
}

impl Build {
    /// Sums the raw stats of all six contributing parts.
    pub fn total_stats(&self, catalog: &PartCatalog) -> StatVector {
        catalog.part(Slot::Engine, self.engine).stats
            + catalog.part(Slot::Exhaust, self.exhaust).stats
            + catalog.part(Slot::Suspension, self.suspension).stats
            + catalog.part(Slot::Gearbox, self.gearbox).stats
            + catalog.part(Slot::Trinket, self.trinkets.0).stats
            + catalog.part(Slot::Trinket, self.trinkets.1).stats
    }

    /// Resolves the six part names, in slot order (trinkets last).
    pub fn part_names<'a>(&self, catalog: &'a PartCatalog) -> [&'a str; 6] {
        [
            catalog.part(Slot::Engine, self.engine).name.as_str(),
            catalog.part(Slot::Exhaust, self.exhaust).name.as_str(),
            catalog.part(Slot::Suspension, self.suspension).name.as_str(),
            catalog.part(Slot::Gearbox, self.gearbox).name.as_str(),
            catalog.part(Slot::Trinket, self.trinkets.0).name.as_str(),
            catalog.part(Slot::Trinket, self.trinkets.1).name.as_str(),
        ]
    }
}
