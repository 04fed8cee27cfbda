//! Discrete resource units carried by edges
//!
//! A [`UnitSet`] records which units (slots, channels, wavelengths, ...) are
//! available on an edge. Contiguous runs are built with
//! [`UnitSet::from_range`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Identifier of a single resource unit
pub type Unit = u32;

/// Ordered set of resource units
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitSet(BTreeSet<Unit>);

impl UnitSet {
    pub fn new() -> Self {
        UnitSet(BTreeSet::new())
    }

    /// Contiguous units `range.start` up to, but excluding, `range.end`
    pub fn from_range(range: Range<Unit>) -> Self {
        UnitSet(range.collect())
    }

    /// Returns true if the unit was not present
    pub fn insert(&mut self, unit: Unit) -> bool {
        self.0.insert(unit)
    }

    /// Returns true if the unit was present
    pub fn remove(&mut self, unit: Unit) -> bool {
        self.0.remove(&unit)
    }

    pub fn contains(&self, unit: Unit) -> bool {
        self.0.contains(&unit)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Unit> + '_ {
        self.0.iter().copied()
    }

    pub fn is_superset(&self, other: &UnitSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Units available in both sets
    pub fn intersection(&self, other: &UnitSet) -> UnitSet {
        UnitSet(self.0.intersection(&other.0).copied().collect())
    }
}

impl FromIterator<Unit> for UnitSet {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        UnitSet(iter.into_iter().collect())
    }
}

impl From<Range<Unit>> for UnitSet {
    fn from(range: Range<Unit>) -> Self {
        UnitSet::from_range(range)
    }
}

impl fmt::Debug for UnitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for UnitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", unit)?;
        }
        f.write_str("}")
    }
}
