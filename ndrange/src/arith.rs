//! Overflow-safe arithmetic shared by the range kinds.
//!
//! Distances are computed by casting to `u64` of equal width and subtracting
//! with wraparound. For ordered bounds the wrapped difference is the exact
//! magnitude, even where the signed subtraction would overflow (e.g. a range
//! spanning both halves of the `i64` domain).

/// Magnitude of `hi - lo`. `hi >= lo` must hold.
pub(crate) const fn udiff(hi: i64, lo: i64) -> u64 {
    (hi as u64).wrapping_sub(lo as u64)
}

/// Length of the closed range `first..=last`. The caller has ruled out
/// emptiness, so `last >= first`.
pub(crate) const fn unit_len(first: i64, last: i64) -> usize {
    udiff(last, first).wrapping_add(1) as usize
}

/// Number of values of a stepped range whose `last` is already normalized to
/// the value iteration reaches. The caller has ruled out emptiness, a zero
/// step, and the statically-unit step (which takes the unit-range rules
/// instead).
///
/// Unit-magnitude runtime steps use plain signed arithmetic; the unsigned
/// form is reserved for `|step| > 1`, where the division keeps the
/// intermediate in range.
pub(crate) const fn step_len(first: i64, step: i64, last: i64) -> usize {
    if step > 1 {
        (udiff(last, first) / step as u64) as usize + 1
    } else if step < -1 {
        (udiff(first, last) / step.unsigned_abs()) as usize + 1
    } else if step == 1 {
        (last - first + 1) as usize
    } else {
        // step == -1
        (first - last + 1) as usize
    }
}

/// The last value reached from `start` stepping by `step` toward `stop`.
/// Total for nonzero `step`. A stop on the wrong side of `start` lands one
/// step short of `start`, an empty range that keeps `start` meaningful.
pub(crate) const fn stepped_last(start: i64, step: i64, stop: i64) -> i64 {
    if start == stop {
        stop
    } else if step > 0 {
        if stop > start {
            stop - (udiff(stop, start) % step as u64) as i64
        } else {
            start - 1
        }
    } else if stop > start {
        start + 1
    } else {
        stop + (udiff(start, stop) % step.unsigned_abs()) as i64
    }
}
