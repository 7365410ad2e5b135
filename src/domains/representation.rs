use std::fmt::Debug;

use super::IntervalEnumeration;
use super::ValueEnumeration;
use crate::basic_types::DomainValue;
use crate::basic_types::Interval;

/// The range-granularity primitives every domain representation supplies.
///
/// The domain-vs-domain operations of [`crate::domains::Domain`] are written once on top of these
/// primitives and the enumeration protocol, so a representation only has to get the single-range
/// cases right.
///
/// All range arguments satisfy `lo <= hi`.
pub trait DomainRepresentation<V: DomainValue>: Clone + Debug {
    /// An empty set of the same representation.
    fn empty_like(&self) -> Self;

    fn is_empty(&self) -> bool;

    /// The number of values, saturating at [`usize::MAX`].
    fn size(&self) -> usize;

    fn min(&self) -> Option<&V>;

    fn max(&self) -> Option<&V>;

    /// Whether every value of `[lo, hi]` is in the set.
    fn contains_range(&self, lo: &V, hi: &V) -> bool;

    /// Whether some value of `[lo, hi]` is in the set.
    fn intersects_range(&self, lo: &V, hi: &V) -> bool;

    /// Add all values of `[lo, hi]` to the set.
    fn union_range_adapt(&mut self, lo: &V, hi: &V);

    /// Remove all values of `[lo, hi]` from the set.
    fn subtract_range_adapt(&mut self, lo: &V, hi: &V);

    /// The values of the set which lie in `[lo, hi]`.
    fn intersect_range(&self, lo: &V, hi: &V) -> Self;

    /// The number of maximal runs of consecutive values.
    fn interval_count(&self) -> usize;

    /// The `index`-th maximal run, counted from the smallest value.
    fn nth_interval(&self, index: usize) -> Option<Interval<V>>;

    /// The `index`-th smallest value.
    fn element_at(&self, index: usize) -> Option<V>;

    /// The smallest value in the set strictly greater than `value`.
    fn next_value(&self, value: &V) -> Option<V>;

    /// The largest value in the set strictly smaller than `value`.
    fn previous_value(&self, value: &V) -> Option<V>;

    /// All values of `universe` which are not in the set.
    fn complement_within(&self, universe: &Interval<V>) -> Self;

    fn values(&self) -> ValueEnumeration<'_, V>;

    fn intervals(&self) -> IntervalEnumeration<'_, V>;

    /// Whether the internal storage satisfies the representation invariants.
    fn is_consistent(&self) -> bool;
}
