//! Lazy build enumeration.
//!
//! [`BuildEnumerator`] walks the full Cartesian product
//! Engine × Exhaust × Suspension × Gearbox crossed with every unordered
//! pair of distinct trinkets. Pairs are generated as ascending index
//! pairs `(i, j)` with `i < j`, so the `(A, B)`/`(B, A)` duplicate and
//! the `(A, A)` degenerate case never exist, not even transiently.

use super::build::Build;
use crate::catalog::{PartCatalog, Slot};

/// Iterator over every legal build of a catalog, in deterministic
/// lexicographic order: engine-major, then exhaust, suspension, gearbox,
/// then trinket pairs `(i, j)` with `j` advancing fastest.
///
/// The enumeration is finite and restartable: a fresh enumerator always
/// starts from the beginning, and no cursor state is shared between
/// instances. Each emitted [`Build`] carries its position in this order
/// as [`Build::ordinal`].
///
/// # Examples
///
/// ```
/// use gearopt::catalog::PartCatalog;
/// use gearopt::combinator::BuildEnumerator;
///
/// let catalog = PartCatalog::stock();
/// let first = BuildEnumerator::new(&catalog).next().unwrap();
/// assert_eq!((first.engine, first.trinkets), (0, (0, 1)));
/// ```
pub struct BuildEnumerator<'a> {
    catalog: &'a PartCatalog,
    cursor: Option<Cursor>,
    emitted: usize,
}

#[derive(Clone, Copy)]
struct Cursor {
    engine: usize,
    exhaust: usize,
    suspension: usize,
    gearbox: usize,
    t1: usize,
    t2: usize,
}

impl<'a> BuildEnumerator<'a> {
    /// Starts a fresh enumeration over the catalog.
    ///
    /// The catalog's construction invariants guarantee at least one build
    /// exists.
    pub fn new(catalog: &'a PartCatalog) -> Self {
        Self {
            catalog,
            cursor: Some(Cursor {
                engine: 0,
                exhaust: 0,
                suspension: 0,
                gearbox: 0,
                t1: 0,
                t2: 1,
            }),
            emitted: 0,
        }
    }

    /// Advances the cursor one position, or returns `None` past the end.
    fn advance(&self, mut c: Cursor) -> Option<Cursor> {
        let trinkets = self.catalog.pool_size(Slot::Trinket);

        c.t2 += 1;
        if c.t2 < trinkets {
            return Some(c);
        }
        c.t1 += 1;
        c.t2 = c.t1 + 1;
        if c.t2 < trinkets {
            return Some(c);
        }
        c.t1 = 0;
        c.t2 = 1;

        c.gearbox += 1;
        if c.gearbox < self.catalog.pool_size(Slot::Gearbox) {
            return Some(c);
        }
        c.gearbox = 0;

        c.suspension += 1;
        if c.suspension < self.catalog.pool_size(Slot::Suspension) {
            return Some(c);
        }
        c.suspension = 0;

        c.exhaust += 1;
        if c.exhaust < self.catalog.pool_size(Slot::Exhaust) {
            return Some(c);
        }
        c.exhaust = 0;

        c.engine += 1;
        if c.engine < self.catalog.pool_size(Slot::Engine) {
            return Some(c);
        }
        None
    }
}

impl Iterator for BuildEnumerator<'_> {
    type Item = Build;

    fn next(&mut self) -> Option<Build> {
        let c = self.cursor?;
        let build = Build {
            engine: c.engine,
            exhaust: c.exhaust,
            suspension: c.suspension,
            gearbox: c.gearbox,
            trinkets: (c.t1, c.t2),
            ordinal: self.emitted,
        };
        self.emitted += 1;
        self.cursor = self.advance(c);
        Some(build)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.catalog.build_count() as usize).saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}
