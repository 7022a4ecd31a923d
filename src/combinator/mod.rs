//! Legal build enumeration.
//!
//! Produces the finite, lazy sequence of every legal build a catalog
//! allows: one part per non-trinket slot crossed with every unordered
//! pair of distinct trinkets. Emission order is deterministic, which is
//! what downstream tie-breaking is defined against.

mod build;
mod iter;

pub use build::Build;
pub use iter::BuildEnumerator;
