//! Optionally-static index ranges for array axes.
//!
//! Provides [`UnitRange`] and [`StepRange`], closed 1-based integer ranges
//! whose start, step, and stop are each independently either pinned at
//! construction time or ordinary runtime values, with identical observable
//! behavior either way. Pinned components survive into the constructed value,
//! so downstream code can fold bounds checks and length arithmetic for
//! containers whose extents are fixed.
//!
//! [`reconcile`] and the [`indices()`]/[`common_indices`] entry points merge
//! index sets reported by several containers into one consistent
//! [`AxisIndices`] sweep, preferring static information and failing loudly on
//! disagreement.
//!
//! The crate is a foundational value library: every operation is a pure,
//! synchronous computation over immutable values, with no I/O, no logging,
//! and no shared mutable state.

mod arith;
mod indices;
mod range;
mod reconcile;

pub use indices::AxisIndices;
pub use indices::IndexSource;
pub use indices::common_indices;
pub use indices::indices;
pub use range::RangeError;
pub use range::StepRange;
pub use range::StepRangeIterator;
pub use range::UnitRange;
pub use range::UnitRangeIterator;
pub use reconcile::ReconcileError;
pub use reconcile::reconcile;
pub use reconcile::reconcile_all;
pub use reconcile::reconcile_ranges;
pub use reconcile::reconcile_trusted;

/// An integer that is either pinned at construction time or ordinary runtime
/// data. Re-exported from `staticint` so range construction needs no second
/// import.
pub use staticint::MaybeStatic;
