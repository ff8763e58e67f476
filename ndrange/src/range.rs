//! Closed, 1-based integer ranges whose components are optionally static.
//!
//! [`UnitRange`] steps by one; [`StepRange`] steps by any nonzero amount and
//! always stores the last value its iteration actually reaches, never the raw
//! stop it was built from. Each component independently tracks whether it is
//! pinned ([`MaybeStatic::Static`]) or ordinary runtime data
//! ([`MaybeStatic::Dyn`]), and the distinction survives construction, so
//! downstream code can specialize on what it knows.
//!
//! A range whose `first` is statically 1 describes a full axis sweep and
//! takes cheaper one-sided paths through emptiness, length, and indexing;
//! when every component is pinned those paths fold to constants.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use staticint::MaybeStatic;

use crate::arith;

#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    #[error("step cannot be zero")]
    ZeroStep,

    #[error("step must be 1, got {step}")]
    NonUnitStep { step: MaybeStatic },

    #[error("index {index} out of bounds for range {range}")]
    OutOfBounds { index: i64, range: UnitRange },

    #[error("index {index} out of bounds for range {range}")]
    OutOfBoundsStep { index: i64, range: StepRange },
}

/// A contiguous ascending range `first..=last` with the step fixed at 1.
///
/// The step is not stored. Emptiness is exactly `first > last`; iteration is
/// ascending.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRange {
    first: MaybeStatic,
    last: MaybeStatic,
}

impl UnitRange {
    /// Creates `first..=last`. Any static/dynamic combination is allowed and
    /// is preserved in the result.
    pub const fn new(first: MaybeStatic, last: MaybeStatic) -> Self {
        Self { first, last }
    }

    /// The full sweep `1..=last`, with the start pinned statically.
    pub const fn one_to(last: MaybeStatic) -> Self {
        Self {
            first: MaybeStatic::Static(1),
            last,
        }
    }

    pub const fn first(&self) -> MaybeStatic {
        self.first
    }

    pub const fn last(&self) -> MaybeStatic {
        self.last
    }

    /// Whether the range contains no values.
    ///
    /// A start pinned at 1 needs only its upper bound consulted.
    pub const fn is_empty(&self) -> bool {
        match self.first.known() {
            Some(1) => self.last.get() <= 0,
            _ => self.first.get() > self.last.get(),
        }
    }

    /// Number of values in the range.
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            match self.first.known() {
                Some(1) => self.last.get() as usize,
                _ => arith::unit_len(self.first.get(), self.last.get()),
            }
        }
    }

    /// The length derivable from the pinned components alone: `Some` iff both
    /// endpoints are static.
    pub const fn known_len(&self) -> Option<usize> {
        match (self.first.known(), self.last.known()) {
            (Some(first), Some(last)) => Some(if first == 1 {
                if last <= 0 {
                    0
                } else {
                    last as usize
                }
            } else if first > last {
                0
            } else {
                arith::unit_len(first, last)
            }),
            _ => None,
        }
    }

    /// The `i`-th value of the range, 1-based.
    ///
    /// With the start pinned at 1 the value is `i` itself and only the upper
    /// bound is checked; otherwise the value is `first + (i - 1)`.
    pub fn get(&self, i: i64) -> Result<i64, RangeError> {
        match self.first.known() {
            Some(1) => {
                if 1 <= i && i <= self.last.get() {
                    Ok(i)
                } else {
                    Err(RangeError::OutOfBounds {
                        index: i,
                        range: *self,
                    })
                }
            }
            _ => {
                let value = self.first.get() + (i - 1);
                if i >= 1 && value <= self.last.get() {
                    Ok(value)
                } else {
                    Err(RangeError::OutOfBounds {
                        index: i,
                        range: *self,
                    })
                }
            }
        }
    }

    /// The `i`-th value without bounds validation, for callers that have
    /// already established `1 <= i <= len`.
    pub const fn get_unchecked(&self, i: i64) -> i64 {
        match self.first.known() {
            Some(1) => i,
            _ => self.first.get() + (i - 1),
        }
    }

    /// Iterates the values in ascending order.
    pub fn iter(&self) -> UnitRangeIterator {
        UnitRangeIterator {
            next: self.first.get(),
            remaining: self.len(),
        }
    }
}

impl fmt::Display for UnitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

impl From<std::ops::RangeInclusive<i64>> for UnitRange {
    fn from(r: std::ops::RangeInclusive<i64>) -> Self {
        Self::new(MaybeStatic::Dyn(*r.start()), MaybeStatic::Dyn(*r.end()))
    }
}

impl TryFrom<StepRange> for UnitRange {
    type Error = RangeError;

    fn try_from(r: StepRange) -> Result<Self, RangeError> {
        if r.step.get() == 1 {
            Ok(Self::new(r.first, r.last))
        } else {
            Err(RangeError::NonUnitStep { step: r.step })
        }
    }
}

impl IntoIterator for &UnitRange {
    type Item = i64;
    type IntoIter = UnitRangeIterator;

    fn into_iter(self) -> UnitRangeIterator {
        self.iter()
    }
}

impl IntoIterator for UnitRange {
    type Item = i64;
    type IntoIter = UnitRangeIterator;

    fn into_iter(self) -> UnitRangeIterator {
        self.iter()
    }
}

/// Iterator over the values of a [`UnitRange`].
#[derive(Debug, Clone)]
pub struct UnitRangeIterator {
    next: i64,
    remaining: usize,
}

impl Iterator for UnitRangeIterator {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UnitRangeIterator {}

/// An arithmetic sequence `first, first + step, ..., last` with a nonzero
/// step.
///
/// The stored `last` is always the value iteration actually reaches:
/// construction normalizes the supplied stop down (or up, for negative steps)
/// to the nearest value reachable from `first` by whole steps. When the step
/// is statically 1 the stop is taken as-is and the range behaves exactly like
/// a [`UnitRange`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepRange {
    first: MaybeStatic,
    step: MaybeStatic,
    last: MaybeStatic,
}

impl StepRange {
    /// Creates the range from `start` toward `stop` stepping by `step`.
    ///
    /// A zero step is rejected. A stop on the wrong side of `start` yields an
    /// empty range whose stored last lands one step short of `start`.
    pub fn new(
        start: MaybeStatic,
        step: MaybeStatic,
        stop: MaybeStatic,
    ) -> Result<Self, RangeError> {
        if step.get() == 0 {
            return Err(RangeError::ZeroStep);
        }
        let last = match step.known() {
            Some(1) => stop,
            _ => true_last(start, step, stop),
        };
        Ok(Self {
            first: start,
            step,
            last,
        })
    }

    pub const fn first(&self) -> MaybeStatic {
        self.first
    }

    pub const fn step(&self) -> MaybeStatic {
        self.step
    }

    /// The last value iteration reaches, not the raw stop supplied at
    /// construction.
    pub const fn last(&self) -> MaybeStatic {
        self.last
    }

    /// Whether the range contains no values.
    pub const fn is_empty(&self) -> bool {
        let first = self.first.get();
        let step = self.step.get();
        let last = self.last.get();
        first != last && ((step > 0) != (last > first))
    }

    /// Number of values in the range.
    ///
    /// A step pinned at 1 takes the unit-range rules, including the pinned
    /// start fast path.
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        match self.step.known() {
            Some(1) => match self.first.known() {
                Some(1) => self.last.get() as usize,
                _ => arith::unit_len(self.first.get(), self.last.get()),
            },
            _ => arith::step_len(self.first.get(), self.step.get(), self.last.get()),
        }
    }

    /// The length derivable from the pinned components alone. Requires a
    /// static step; a step pinned at 1 defers to the unit-range rule, which
    /// needs both endpoints static.
    pub const fn known_len(&self) -> Option<usize> {
        match self.step.known() {
            Some(1) => UnitRange::new(self.first, self.last).known_len(),
            Some(step) => match (self.first.known(), self.last.known()) {
                (Some(first), Some(last)) => {
                    if first != last && ((step > 0) != (last > first)) {
                        Some(0)
                    } else {
                        Some(arith::step_len(first, step, last))
                    }
                }
                _ => None,
            },
            None => None,
        }
    }

    /// The `i`-th value of the range, 1-based.
    pub fn get(&self, i: i64) -> Result<i64, RangeError> {
        if 1 <= i && i as u64 <= self.len() as u64 {
            Ok(self.get_unchecked(i))
        } else {
            Err(RangeError::OutOfBoundsStep {
                index: i,
                range: *self,
            })
        }
    }

    /// The `i`-th value without bounds validation, for callers that have
    /// already established `1 <= i <= len`.
    pub const fn get_unchecked(&self, i: i64) -> i64 {
        self.first.get() + (i - 1) * self.step.get()
    }

    /// Iterates the values from `first` to `last`.
    pub fn iter(&self) -> StepRangeIterator {
        StepRangeIterator {
            next: self.first.get(),
            step: self.step.get(),
            remaining: self.len(),
        }
    }
}

/// The last value reachable from `start` by whole steps toward `stop`, with
/// the static representation per branch: `start == stop` keeps `stop` as
/// given, the wrong-side stops follow `start`, and the modular branches are
/// static only when every input is.
fn true_last(start: MaybeStatic, step: MaybeStatic, stop: MaybeStatic) -> MaybeStatic {
    let (a, s, b) = (start.get(), step.get(), stop.get());
    if a == b {
        stop
    } else if (s > 0) != (b > a) {
        if s > 0 {
            start - MaybeStatic::Static(1)
        } else {
            start + MaybeStatic::Static(1)
        }
    } else {
        let last = arith::stepped_last(a, s, b);
        if start.is_static() && step.is_static() && stop.is_static() {
            MaybeStatic::Static(last)
        } else {
            MaybeStatic::Dyn(last)
        }
    }
}

impl fmt::Display for StepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.first, self.step, self.last)
    }
}

impl From<UnitRange> for StepRange {
    fn from(r: UnitRange) -> Self {
        Self {
            first: r.first,
            step: MaybeStatic::Static(1),
            last: r.last,
        }
    }
}

impl IntoIterator for &StepRange {
    type Item = i64;
    type IntoIter = StepRangeIterator;

    fn into_iter(self) -> StepRangeIterator {
        self.iter()
    }
}

impl IntoIterator for StepRange {
    type Item = i64;
    type IntoIter = StepRangeIterator;

    fn into_iter(self) -> StepRangeIterator {
        self.iter()
    }
}

/// Iterator over the values of a [`StepRange`].
#[derive(Debug, Clone)]
pub struct StepRangeIterator {
    next: i64,
    step: i64,
    remaining: usize,
}

impl Iterator for StepRangeIterator {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StepRangeIterator {}

/// Constructs a [`UnitRange`] whose bounds are compile-time constants.
///
/// ```
/// let r = ndrange::urange!(1, 5);
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.known_len(), Some(5));
/// ```
#[macro_export]
macro_rules! urange {
    ($first:literal, $last:literal) => {
        $crate::UnitRange::new(
            $crate::MaybeStatic::Static($first),
            $crate::MaybeStatic::Static($last),
        )
    };
}

/// Constructs a [`StepRange`] whose components are compile-time constants.
/// The step must be nonzero.
///
/// ```
/// let r = ndrange::srange!(1, 2, 10);
/// assert_eq!(r.last().get(), 9);
/// assert_eq!(r.known_len(), Some(5));
/// ```
#[macro_export]
macro_rules! srange {
    ($first:literal, $step:literal, $last:literal) => {
        $crate::StepRange::new(
            $crate::MaybeStatic::Static($first),
            $crate::MaybeStatic::Static($step),
            $crate::MaybeStatic::Static($last),
        )
        .expect("step must be nonzero")
    };
}
