//! Validated part pools.
//!
//! [`PartCatalog`] holds one ordered pool of parts per slot and is the
//! only way parts enter the engine. All pool invariants are checked once
//! at construction; downstream stages can rely on them unconditionally.

use super::types::{Part, Slot};
use crate::error::{EngineError, Result};
use std::collections::HashSet;

/// Fixed pools of available parts, one per slot.
///
/// Invariants (enforced at construction):
///
/// - every non-trinket slot holds at least one part;
/// - the trinket pool holds at least two parts with distinct names
///   (a build carries an unordered pair of distinct trinkets).
///
/// Pools preserve insertion order; build enumeration and tie-breaking are
/// defined in terms of these indices.
///
/// # Examples
///
/// ```
/// use gearopt::catalog::{Part, PartCatalog, Slot, StatKey};
///
/// let catalog = PartCatalog::new(vec![
///     Part::new(Slot::Engine, "Basic Engine", &[(StatKey::Speed, 0.5)]),
///     Part::new(Slot::Exhaust, "Starter Exhaust", &[]),
///     Part::new(Slot::Suspension, "Fresh Suspension", &[]),
///     Part::new(Slot::Gearbox, "Grass Gearbox", &[]),
///     Part::new(Slot::Trinket, "Ducky", &[]),
///     Part::new(Slot::Trinket, "Anchor", &[]),
/// ])?;
/// assert_eq!(catalog.build_count(), 1);
/// # Ok::<(), gearopt::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartCatalog {
    pools: [Vec<Part>; Slot::ALL.len()],
}

impl PartCatalog {
    /// Builds a catalog from a flat part list, routing each part into its
    /// slot's pool in input order.
    ///
    /// Fails with [`EngineError::CatalogEmpty`] if any slot ends up too
    /// small to form a legal build.
    pub fn new(parts: Vec<Part>) -> Result<Self> {
        let mut pools: [Vec<Part>; Slot::ALL.len()] = Default::default();
        for part in parts {
            pools[part.slot as usize].push(part);
        }
        let catalog = Self { pools };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for slot in Slot::ALL {
            let pool = self.parts(slot);
            // Distinctness only matters where pairs are drawn from the pool.
            let count = if slot == Slot::Trinket {
                pool.iter()
                    .map(|p| p.name.as_str())
                    .collect::<HashSet<_>>()
                    .len()
            } else {
                pool.len()
            };
            if count < slot.min_pool_size() {
                return Err(EngineError::CatalogEmpty {
                    slot,
                    count,
                    required: slot.min_pool_size(),
                });
            }
        }
        Ok(())
    }

    /// Returns the ordered pool for a slot.
    pub fn parts(&self, slot: Slot) -> &[Part] {
        &self.pools[slot as usize]
    }

    /// Returns one part by slot and pool index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds for the slot's pool.
    pub fn part(&self, slot: Slot, index: usize) -> &Part {
        &self.pools[slot as usize][index]
    }

    /// Returns the pool size for a slot.
    pub fn pool_size(&self, slot: Slot) -> usize {
        self.pools[slot as usize].len()
    }

    /// Number of legal builds this catalog can produce:
    /// `|E|·|X|·|S|·|G|·C(|T|, 2)`.
    pub fn build_count(&self) -> u64 {
        let base: u64 = [Slot::Engine, Slot::Exhaust, Slot::Suspension, Slot::Gearbox]
            .iter()
            .map(|&s| self.pool_size(s) as u64)
            .product();
        let t = self.pool_size(Slot::Trinket) as u64;
        base * t * (t - 1) / 2
    }

    /// Derives a sub-catalog keeping only the parts the predicate accepts
    /// (an owned-inventory selection, typically by name).
    ///
    /// The surviving parts keep their relative order. Fails with
    /// [`EngineError::CatalogEmpty`] if the selection leaves any slot too
    /// small for a legal build.
    pub fn filter<F: FnMut(&Part) -> bool>(&self, mut keep: F) -> Result<Self> {
        let parts = self
            .pools
            .iter()
            .flatten()
            .filter(|&p| keep(p))
            .cloned()
            .collect();
        Self::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::StatKey;

    fn sample_parts() -> Vec<Part> {
        vec![
            Part::new(Slot::Engine, "E1", &[(StatKey::Speed, 1.0)]),
            Part::new(Slot::Engine, "E2", &[(StatKey::Speed, 2.0)]),
            Part::new(Slot::Exhaust, "X1", &[]),
            Part::new(Slot::Suspension, "S1", &[]),
            Part::new(Slot::Gearbox, "G1", &[]),
            Part::new(Slot::Trinket, "T1", &[]),
            Part::new(Slot::Trinket, "T2", &[]),
            Part::new(Slot::Trinket, "T3", &[]),
        ]
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = PartCatalog::new(sample_parts()).unwrap();
        assert_eq!(catalog.pool_size(Slot::Engine), 2);
        assert_eq!(catalog.pool_size(Slot::Trinket), 3);
        assert_eq!(catalog.part(Slot::Engine, 1).name, "E2");
    }

    #[test]
    fn test_build_count() {
        let catalog = PartCatalog::new(sample_parts()).unwrap();
        // 2 * 1 * 1 * 1 * C(3, 2) = 6
        assert_eq!(catalog.build_count(), 6);
    }

    #[test]
    fn test_missing_slot_rejected() {
        let parts: Vec<Part> = sample_parts()
            .into_iter()
            .filter(|p| p.slot != Slot::Gearbox)
            .collect();
        let err = PartCatalog::new(parts).unwrap_err();
        assert_eq!(
            err,
            EngineError::CatalogEmpty {
                slot: Slot::Gearbox,
                count: 0,
                required: 1,
            }
        );
    }

    #[test]
    fn test_single_trinket_rejected() {
        let parts: Vec<Part> = sample_parts()
            .into_iter()
            .filter(|p| p.slot != Slot::Trinket || p.name == "T1")
            .collect();
        let err = PartCatalog::new(parts).unwrap_err();
        assert_eq!(
            err,
            EngineError::CatalogEmpty {
                slot: Slot::Trinket,
                count: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_trinket_names_not_distinct() {
        let mut parts = sample_parts();
        parts.retain(|p| p.slot != Slot::Trinket);
        parts.push(Part::new(Slot::Trinket, "Same", &[]));
        parts.push(Part::new(Slot::Trinket, "Same", &[]));
        let err = PartCatalog::new(parts).unwrap_err();
        assert_eq!(
            err,
            EngineError::CatalogEmpty {
                slot: Slot::Trinket,
                count: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = PartCatalog::new(sample_parts()).unwrap();
        let sub = catalog.filter(|p| p.name != "E1").unwrap();
        assert_eq!(sub.pool_size(Slot::Engine), 1);
        assert_eq!(sub.part(Slot::Engine, 0).name, "E2");
        assert_eq!(sub.pool_size(Slot::Trinket), 3);
    }

    #[test]
    fn test_filter_can_empty_a_slot() {
        let catalog = PartCatalog::new(sample_parts()).unwrap();
        let err = catalog.filter(|p| p.slot != Slot::Exhaust).unwrap_err();
        assert!(matches!(
            err,
            EngineError::CatalogEmpty {
                slot: Slot::Exhaust,
                ..
            }
        ));
    }
}
