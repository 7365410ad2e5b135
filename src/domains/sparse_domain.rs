use super::DomainRepresentation;
use super::IntervalEnumeration;
use super::ValueEnumeration;
use crate::basic_types::DomainValue;
use crate::basic_types::Interval;
use crate::munchkin_assert_simple;

/// A set of values stored explicitly as a sorted vector without duplicates.
///
/// Suited for small domains with many holes; every value costs one slot, so filling a sparse
/// domain with a wide range is proportionally expensive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseDomain<V> {
    values: Vec<V>,
}

impl<V: DomainValue> SparseDomain<V> {
    pub fn empty() -> Self {
        SparseDomain { values: Vec::new() }
    }

    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        let mut values: Vec<V> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        SparseDomain { values }
    }

    /// The domain holding every value of `[lo, hi]`.
    pub fn from_range(lo: V, hi: V) -> Self {
        let mut domain = Self::empty();
        domain.union_range_adapt(&lo, &hi);
        domain
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// The index range of the stored values lying in `[lo, hi]`.
    fn bounds_of(&self, lo: &V, hi: &V) -> (usize, usize) {
        let start = self.values.partition_point(|value| value < lo);
        let end = self.values.partition_point(|value| value <= hi);
        (start, end.max(start))
    }
}

impl<V: DomainValue> DomainRepresentation<V> for SparseDomain<V> {
    fn empty_like(&self) -> Self {
        Self::empty()
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn min(&self) -> Option<&V> {
        self.values.first()
    }

    fn max(&self) -> Option<&V> {
        self.values.last()
    }

    fn contains_range(&self, lo: &V, hi: &V) -> bool {
        let (start, end) = self.bounds_of(lo, hi);
        end - start == V::count_between(lo, hi)
    }

    fn intersects_range(&self, lo: &V, hi: &V) -> bool {
        let (start, end) = self.bounds_of(lo, hi);
        start < end
    }

    fn union_range_adapt(&mut self, lo: &V, hi: &V) {
        munchkin_assert_simple!(lo <= hi, "malformed range [{lo}, {hi}]");

        let (start, end) = self.bounds_of(lo, hi);
        let mut range = Vec::new();
        let mut value = lo.clone();
        while &value < hi {
            let next = value.successor();
            range.push(value);
            value = next;
        }
        range.push(value);

        let _ = self.values.splice(start..end, range);
    }

    fn subtract_range_adapt(&mut self, lo: &V, hi: &V) {
        let (start, end) = self.bounds_of(lo, hi);
        let _ = self.values.drain(start..end);
    }

    fn intersect_range(&self, lo: &V, hi: &V) -> Self {
        let (start, end) = self.bounds_of(lo, hi);
        SparseDomain {
            values: self.values[start..end].to_vec(),
        }
    }

    fn interval_count(&self) -> usize {
        self.intervals().count()
    }

    fn nth_interval(&self, index: usize) -> Option<Interval<V>> {
        self.intervals().nth(index)
    }

    fn element_at(&self, index: usize) -> Option<V> {
        self.values.get(index).cloned()
    }

    fn next_value(&self, value: &V) -> Option<V> {
        let index = self.values.partition_point(|stored| stored <= value);
        self.values.get(index).cloned()
    }

    fn previous_value(&self, value: &V) -> Option<V> {
        let index = self.values.partition_point(|stored| stored < value);
        index.checked_sub(1).map(|index| self.values[index].clone())
    }

    fn complement_within(&self, universe: &Interval<V>) -> Self {
        let (start, end) = self.bounds_of(universe.lo(), universe.hi());
        let mut present = self.values[start..end].iter().peekable();

        let mut values = Vec::new();
        let mut value = universe.lo().clone();
        loop {
            if present.next_if(|stored| **stored == value).is_none() {
                values.push(value.clone());
            }
            if &value >= universe.hi() {
                break;
            }
            value = value.successor();
        }

        SparseDomain { values }
    }

    fn values(&self) -> ValueEnumeration<'_, V> {
        ValueEnumeration::over_values(&self.values)
    }

    fn intervals(&self) -> IntervalEnumeration<'_, V> {
        IntervalEnumeration::over_values(&self.values)
    }

    fn is_consistent(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] < pair[1])
    }
}
