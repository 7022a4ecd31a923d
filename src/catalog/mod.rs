//! Part pools and raw stat data.
//!
//! The catalog is the engine's only data source: fixed, validated pools of
//! parts per equipment slot. Parts carry dense [`StatVector`]s over the
//! game's raw stat table, and the catalog enforces the pool invariants
//! (one part minimum per slot, two distinct trinkets) that make build
//! enumeration total.

mod pools;
mod stock;
mod types;

pub use pools::PartCatalog;
pub use stock::stock_parts;
pub use types::{Part, Slot, StatKey, StatVector};
