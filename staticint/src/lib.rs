//! Integers that are optionally pinned at construction time.
//!
//! [`MaybeStatic`] carries an `i64` in one of two representations:
//! [`MaybeStatic::Static`], a value fixed when the program is written and
//! eligible for constant folding, and [`MaybeStatic::Dyn`], an ordinary
//! runtime value. The two compare equal whenever they carry the same value;
//! arithmetic between two static values stays static, while any dynamic
//! operand makes the result dynamic.
//!
//! Every query and all the arithmetic is a total function over plain values:
//! nothing in this crate fails. The crate is a leaf with no dependencies
//! beyond `serde`, so it can be reused in any layer.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Rem;
use std::ops::Sub;

use serde::Deserialize;
use serde::Serialize;

/// A machine integer that is either pinned (`Static`) or ordinary runtime
/// data (`Dyn`).
///
/// Callers specialize by asking [`MaybeStatic::known`]; the representation is
/// part of the value and survives arithmetic per the propagation rule above.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub enum MaybeStatic {
    /// A value fixed at construction, participating in constant folding.
    Static(i64),
    /// An ordinary runtime value.
    Dyn(i64),
}

impl MaybeStatic {
    /// Materializes the value. Always possible, for both representations.
    pub const fn get(self) -> i64 {
        match self {
            MaybeStatic::Static(n) | MaybeStatic::Dyn(n) => n,
        }
    }

    /// The pinned value, if there is one.
    pub const fn known(self) -> Option<i64> {
        match self {
            MaybeStatic::Static(n) => Some(n),
            MaybeStatic::Dyn(_) => None,
        }
    }

    /// Whether the value is pinned.
    pub const fn is_static(self) -> bool {
        matches!(self, MaybeStatic::Static(_))
    }
}

impl From<i64> for MaybeStatic {
    fn from(n: i64) -> Self {
        MaybeStatic::Dyn(n)
    }
}

// Equality is by value across representations: Static(n) == Dyn(n). Hash and
// ordering must agree with that, so all three go through the materialized
// value.

impl PartialEq for MaybeStatic {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for MaybeStatic {}

impl Hash for MaybeStatic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl PartialOrd for MaybeStatic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MaybeStatic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl fmt::Display for MaybeStatic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl Add for MaybeStatic {
    type Output = MaybeStatic;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (MaybeStatic::Static(a), MaybeStatic::Static(b)) => MaybeStatic::Static(a + b),
            _ => MaybeStatic::Dyn(self.get() + rhs.get()),
        }
    }
}

impl Sub for MaybeStatic {
    type Output = MaybeStatic;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (MaybeStatic::Static(a), MaybeStatic::Static(b)) => MaybeStatic::Static(a - b),
            _ => MaybeStatic::Dyn(self.get() - rhs.get()),
        }
    }
}

impl Mul for MaybeStatic {
    type Output = MaybeStatic;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (MaybeStatic::Static(a), MaybeStatic::Static(b)) => MaybeStatic::Static(a * b),
            _ => MaybeStatic::Dyn(self.get() * rhs.get()),
        }
    }
}

impl Rem for MaybeStatic {
    type Output = MaybeStatic;

    fn rem(self, rhs: Self) -> Self {
        match (self, rhs) {
            (MaybeStatic::Static(a), MaybeStatic::Static(b)) => MaybeStatic::Static(a % b),
            _ => MaybeStatic::Dyn(self.get() % rhs.get()),
        }
    }
}

impl Neg for MaybeStatic {
    type Output = MaybeStatic;

    fn neg(self) -> Self {
        match self {
            MaybeStatic::Static(n) => MaybeStatic::Static(-n),
            MaybeStatic::Dyn(n) => MaybeStatic::Dyn(-n),
        }
    }
}
