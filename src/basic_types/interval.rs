use std::fmt::Display;
use std::fmt::Formatter;

use super::DomainValue;
use crate::munchkin_assert_simple;

/// A closed range `[lo, hi]` of values with `lo <= hi`.
///
/// It is the building block of the interval representation and the unit produced by interval
/// enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<V> {
    lo: V,
    hi: V,
}

impl<V: DomainValue> Interval<V> {
    /// Create the interval `[lo, hi]`.
    ///
    /// An inverted range is a malformed operand and trips an assertion.
    pub fn new(lo: V, hi: V) -> Self {
        munchkin_assert_simple!(lo <= hi, "malformed interval [{lo}, {hi}]");
        Interval { lo, hi }
    }

    /// The interval containing only `value`.
    pub fn singleton(value: V) -> Self {
        Interval {
            lo: value.clone(),
            hi: value,
        }
    }

    /// The full representable universe `[V::min_int(), V::max_int()]`.
    pub fn universe() -> Self {
        Interval {
            lo: V::min_int(),
            hi: V::max_int(),
        }
    }

    pub fn lo(&self) -> &V {
        &self.lo
    }

    pub fn hi(&self) -> &V {
        &self.hi
    }

    pub fn into_bounds(self) -> (V, V) {
        (self.lo, self.hi)
    }

    /// The number of values in the interval, saturating at [`usize::MAX`].
    pub fn size(&self) -> usize {
        V::count_between(&self.lo, &self.hi)
    }

    pub fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    pub fn contains(&self, value: &V) -> bool {
        &self.lo <= value && value <= &self.hi
    }

    /// Whether zero lies in `[lo, hi]`, endpoints included.
    pub fn contains_zero(&self) -> bool {
        !self.lo.is_positive() && !self.hi.is_negative()
    }

    /// Whether the interval lies entirely on one side of zero.
    pub fn excludes_zero(&self) -> bool {
        self.lo.is_positive() || self.hi.is_negative()
    }
}

impl<V: Display + PartialEq> Display for Interval<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.lo == self.hi {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}..{}", self.lo, self.hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn zero_classification() {
        assert!(Interval::new(-3, 3).contains_zero());
        assert!(Interval::new(0, 3).contains_zero());
        assert!(!Interval::new(1, 3).contains_zero());
        assert!(Interval::new(-5, -1).excludes_zero());
        assert!(!Interval::new(-5, 0).excludes_zero());
    }

    #[test]
    fn display_collapses_singletons() {
        assert_eq!(Interval::singleton(4).to_string(), "4");
        assert_eq!(Interval::new(-2, 7).to_string(), "-2..7");
    }

    #[test]
    #[should_panic]
    fn inverted_bounds_are_rejected() {
        let _ = Interval::new(5, 4);
    }
}
