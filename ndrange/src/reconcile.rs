//! Merging index descriptors that must describe the same logical range.
//!
//! Containers iterated together each report their own valid indices;
//! reconciliation folds those reports into one range, keeping whatever static
//! information either side carries and failing loudly when the sides
//! disagree. Disagreement is a shape bug in the caller, never an
//! input-validation concern, so there is no coercion, no recovery, and no
//! silent preference for either side's runtime value.

use staticint::MaybeStatic;

use crate::AxisIndices;
use crate::UnitRange;

#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("unequal indices: {lhs} != {rhs}")]
    Mismatch { lhs: MaybeStatic, rhs: MaybeStatic },

    #[error("no ranges to reconcile")]
    Empty,
}

/// Merges two values expected to describe the same index.
///
/// A static side upgrades a dynamic side that carries the equal value, so the
/// result is maximally static. Two static values that differ are rejected
/// outright; two pinned constants disagreeing cannot be a data problem.
pub fn reconcile(lhs: MaybeStatic, rhs: MaybeStatic) -> Result<MaybeStatic, ReconcileError> {
    use MaybeStatic::Dyn;
    use MaybeStatic::Static;
    match (lhs, rhs) {
        (Static(a), Static(b)) => {
            if a == b {
                Ok(Static(a))
            } else {
                Err(ReconcileError::Mismatch { lhs, rhs })
            }
        }
        (Static(a), Dyn(v)) | (Dyn(v), Static(a)) => {
            if v == a {
                Ok(Static(a))
            } else {
                Err(ReconcileError::Mismatch { lhs, rhs })
            }
        }
        (Dyn(a), Dyn(b)) => {
            if a == b {
                Ok(lhs)
            } else {
                Err(ReconcileError::Mismatch { lhs, rhs })
            }
        }
    }
}

/// [`reconcile`] with the runtime equality assertions disabled, for callers
/// that have already validated agreement.
///
/// Two differing static values are still rejected: that conflict is evident
/// without consulting any runtime value, and skipping it would paper over a
/// shape bug.
pub fn reconcile_trusted(
    lhs: MaybeStatic,
    rhs: MaybeStatic,
) -> Result<MaybeStatic, ReconcileError> {
    use MaybeStatic::Dyn;
    use MaybeStatic::Static;
    match (lhs, rhs) {
        (Static(a), Static(b)) if a != b => Err(ReconcileError::Mismatch { lhs, rhs }),
        (Static(_), _) | (_, Dyn(_)) => Ok(lhs),
        (Dyn(_), Static(_)) => Ok(rhs),
    }
}

/// Merges two ranges describing the same index sweep into one full-sweep
/// index set. `first` and `last` are reconciled pairwise.
pub fn reconcile_ranges(
    lhs: &UnitRange,
    rhs: &UnitRange,
) -> Result<AxisIndices, ReconcileError> {
    let first = reconcile(lhs.first(), rhs.first())?;
    let last = reconcile(lhs.last(), rhs.last())?;
    Ok(AxisIndices::new(UnitRange::new(first, last)))
}

/// Reduces any number of ranges left to right through pairwise
/// reconciliation. The relation being checked is equality, so the grouping
/// does not matter.
pub fn reconcile_all<I>(ranges: I) -> Result<AxisIndices, ReconcileError>
where
    I: IntoIterator<Item = UnitRange>,
{
    let mut ranges = ranges.into_iter();
    let head = ranges.next().ok_or(ReconcileError::Empty)?;
    let merged = ranges.try_fold(head, |acc, next| {
        Ok(UnitRange::new(
            reconcile(acc.first(), next.first())?,
            reconcile(acc.last(), next.last())?,
        ))
    })?;
    Ok(AxisIndices::new(merged))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use staticint::MaybeStatic::Dyn;
    use staticint::MaybeStatic::Static;

    use super::*;

    #[test]
    fn test_reconcile_both_static() {
        let merged = reconcile(Static(3), Static(3)).unwrap();
        assert_matches!(merged, Static(3));

        assert_matches!(
            reconcile(Static(3), Static(4)),
            Err(ReconcileError::Mismatch {
                lhs: Static(3),
                rhs: Static(4),
            })
        );
    }

    #[test]
    fn test_reconcile_upgrades_dynamic() {
        // the static side wins when the runtime value agrees, in either
        // argument order
        assert_matches!(reconcile(Static(1), Dyn(1)).unwrap(), Static(1));
        assert_matches!(reconcile(Dyn(1), Static(1)).unwrap(), Static(1));

        assert_matches!(
            reconcile(Static(1), Dyn(2)),
            Err(ReconcileError::Mismatch {
                lhs: Static(1),
                rhs: Dyn(2),
            })
        );
    }

    #[test]
    fn test_reconcile_both_dynamic() {
        let merged = reconcile(Dyn(5), Dyn(5)).unwrap();
        assert_matches!(merged, Dyn(5));

        assert_matches!(
            reconcile(Dyn(5), Dyn(6)),
            Err(ReconcileError::Mismatch {
                lhs: Dyn(5),
                rhs: Dyn(6),
            })
        );
    }

    #[test]
    fn test_reconcile_mismatch_is_symmetric() {
        // both orders fail, carrying the values in argument order
        assert_matches!(
            reconcile(Static(1), Dyn(2)),
            Err(ReconcileError::Mismatch {
                lhs: Static(1),
                rhs: Dyn(2),
            })
        );
        assert_matches!(
            reconcile(Dyn(2), Static(1)),
            Err(ReconcileError::Mismatch {
                lhs: Dyn(2),
                rhs: Static(1),
            })
        );
    }

    #[test]
    fn test_reconcile_idempotent() {
        for v in [Static(4), Dyn(4)] {
            let merged = reconcile(v, v).unwrap();
            assert_eq!(merged, v);
            assert_eq!(merged.is_static(), v.is_static());
        }
    }

    #[test]
    fn test_reconcile_error_message() {
        let err = reconcile(Static(1), Dyn(2)).unwrap_err();
        assert_eq!(err.to_string(), "unequal indices: 1 != 2");
    }

    #[test]
    fn test_reconcile_trusted() {
        // runtime disagreement goes unchecked by request
        assert_matches!(reconcile_trusted(Static(1), Dyn(99)).unwrap(), Static(1));
        assert_matches!(reconcile_trusted(Dyn(99), Static(1)).unwrap(), Static(1));
        assert_matches!(reconcile_trusted(Dyn(5), Dyn(7)).unwrap(), Dyn(5));

        // conflicting constants are still a hard error
        assert_matches!(
            reconcile_trusted(Static(1), Static(2)),
            Err(ReconcileError::Mismatch { .. })
        );
    }

    #[test]
    fn test_reconcile_ranges() {
        // a static first upgrades the dynamic first of the other source
        let lhs = UnitRange::new(Static(1), Dyn(5));
        let rhs = UnitRange::new(Dyn(1), Dyn(5));
        let merged = reconcile_ranges(&lhs, &rhs).unwrap();
        assert!(merged.first().is_static());
        assert_eq!(merged.first().known(), Some(1));
        assert_eq!(merged.len(), 5);

        assert_matches!(
            reconcile_ranges(&UnitRange::new(Static(1), Dyn(5)), &UnitRange::new(Dyn(2), Dyn(5))),
            Err(ReconcileError::Mismatch {
                lhs: Static(1),
                rhs: Dyn(2),
            })
        );
    }

    #[test]
    fn test_reconcile_all() {
        let merged = reconcile_all([
            UnitRange::new(Dyn(1), Dyn(4)),
            UnitRange::new(Static(1), Dyn(4)),
            UnitRange::new(Dyn(1), Static(4)),
        ])
        .unwrap();
        assert!(merged.first().is_static());
        assert!(merged.last().is_static());
        assert_eq!(merged.len(), 4);

        // a single range reconciles to itself
        let merged = reconcile_all([UnitRange::new(Dyn(1), Dyn(4))]).unwrap();
        assert_eq!(merged.range(), UnitRange::new(Dyn(1), Dyn(4)));

        assert_matches!(
            reconcile_all(Vec::<UnitRange>::new()),
            Err(ReconcileError::Empty)
        );

        assert_matches!(
            reconcile_all([UnitRange::new(Dyn(1), Dyn(4)), UnitRange::new(Dyn(1), Dyn(5))]),
            Err(ReconcileError::Mismatch { .. })
        );
    }
}
