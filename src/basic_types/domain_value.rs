use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use num::BigInt;
use num::CheckedAdd;
use num::CheckedMul;
use num::FromPrimitive;
use num::Integer;
use num::Signed;
use num::ToPrimitive;

/// The values a domain can hold. Machine-width and arbitrary-precision integers share this
/// contract, so every domain operation is written once against it.
///
/// Values are expected to lie within `[Self::min_int(), Self::max_int()]`; the representable
/// universe leaves enough headroom that the `+ 1`/`- 1` steps used by the domain representations
/// never overflow the underlying type.
pub trait DomainValue:
    Clone
    + Ord
    + Hash
    + Debug
    + Display
    + Integer
    + Signed
    + CheckedAdd
    + CheckedMul
    + ToPrimitive
    + FromPrimitive
{
    /// The smallest value that may appear in a domain.
    fn min_int() -> Self;

    /// The largest value that may appear in a domain.
    fn max_int() -> Self;

    /// The value directly after `self`.
    fn successor(&self) -> Self {
        self.clone() + Self::one()
    }

    /// The value directly before `self`.
    fn predecessor(&self) -> Self {
        self.clone() - Self::one()
    }

    /// The number of values in `[lo, hi]`, saturating at [`usize::MAX`]. An inverted range counts
    /// as zero values.
    fn count_between(lo: &Self, hi: &Self) -> usize {
        if lo > hi {
            return 0;
        }

        (hi.clone() - lo.clone() + Self::one())
            .to_usize()
            .unwrap_or(usize::MAX)
    }

    /// `self + offset`, where `offset` is a number of values.
    fn offset_by(&self, offset: usize) -> Self {
        match Self::from_usize(offset) {
            Some(offset) => self.clone() + offset,
            None => Self::max_int(),
        }
    }
}

impl DomainValue for i32 {
    fn min_int() -> Self {
        i32::MIN / 4 + 2
    }

    fn max_int() -> Self {
        i32::MAX / 4 - 2
    }
}

impl DomainValue for i64 {
    fn min_int() -> Self {
        i64::MIN / 4 + 2
    }

    fn max_int() -> Self {
        i64::MAX / 4 - 2
    }
}

impl DomainValue for BigInt {
    fn min_int() -> Self {
        BigInt::from(i32::min_int())
    }

    fn max_int() -> Self {
        BigInt::from(i32::max_int())
    }
}
