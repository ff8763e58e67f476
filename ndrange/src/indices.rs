//! Container-facing entry points: extracting and combining the valid index
//! sets of host containers.
//!
//! The core does not know how containers store their elements; it only asks
//! them, through [`IndexSource`], for the range of valid 1-based indices.
//! Fixed-size containers report statically pinned bounds, which is what lets
//! code downstream fold their bounds checks away.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use staticint::MaybeStatic;

use crate::RangeError;
use crate::ReconcileError;
use crate::UnitRange;
use crate::UnitRangeIterator;
use crate::reconcile::reconcile_all;

/// A container that can report the range of its valid linear indices.
pub trait IndexSource {
    /// The range of valid indices, `1..=len`.
    fn index_range(&self) -> UnitRange;
}

impl<T> IndexSource for [T] {
    fn index_range(&self) -> UnitRange {
        UnitRange::one_to(MaybeStatic::Dyn(self.len() as i64))
    }
}

impl<T, const N: usize> IndexSource for [T; N] {
    fn index_range(&self) -> UnitRange {
        UnitRange::one_to(MaybeStatic::Static(N as i64))
    }
}

impl<T> IndexSource for Vec<T> {
    fn index_range(&self) -> UnitRange {
        self.as_slice().index_range()
    }
}

impl<S: IndexSource + ?Sized> IndexSource for &S {
    fn index_range(&self) -> UnitRange {
        (**self).index_range()
    }
}

/// The index set produced by a full sweep over an axis.
///
/// Wraps a [`UnitRange`] and marks it as "all valid indices of the axis", as
/// opposed to an arbitrary sub-range, carrying forward whatever static
/// information the sweep had.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisIndices {
    range: UnitRange,
}

impl AxisIndices {
    /// Marks `range` as a full axis sweep.
    pub const fn new(range: UnitRange) -> Self {
        Self { range }
    }

    /// The underlying range.
    pub const fn range(&self) -> UnitRange {
        self.range
    }

    pub const fn first(&self) -> MaybeStatic {
        self.range.first()
    }

    pub const fn last(&self) -> MaybeStatic {
        self.range.last()
    }

    pub const fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub const fn len(&self) -> usize {
        self.range.len()
    }

    pub const fn known_len(&self) -> Option<usize> {
        self.range.known_len()
    }

    /// The `i`-th index of the sweep, 1-based.
    pub fn get(&self, i: i64) -> Result<i64, RangeError> {
        self.range.get(i)
    }

    pub fn iter(&self) -> UnitRangeIterator {
        self.range.iter()
    }
}

impl From<UnitRange> for AxisIndices {
    fn from(range: UnitRange) -> Self {
        Self::new(range)
    }
}

impl fmt::Display for AxisIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indices({})", self.range)
    }
}

impl IntoIterator for &AxisIndices {
    type Item = i64;
    type IntoIter = UnitRangeIterator;

    fn into_iter(self) -> UnitRangeIterator {
        self.iter()
    }
}

impl IntoIterator for AxisIndices {
    type Item = i64;
    type IntoIter = UnitRangeIterator;

    fn into_iter(self) -> UnitRangeIterator {
        self.iter()
    }
}

/// The full index sweep of one container.
pub fn indices<S: IndexSource + ?Sized>(source: &S) -> AxisIndices {
    AxisIndices::new(source.index_range())
}

/// The common index sweep of several containers, reduced left to right
/// through reconciliation.
///
/// All containers must agree on their bounds; a statically pinned bound wins
/// over a dynamic one carrying the equal value.
pub fn common_indices<I>(sources: I) -> Result<AxisIndices, ReconcileError>
where
    I: IntoIterator,
    I::Item: IndexSource,
{
    reconcile_all(sources.into_iter().map(|s| s.index_range()))
}
