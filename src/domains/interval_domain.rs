use std::cmp::max;
use std::cmp::min;

use super::DomainRepresentation;
use super::IntervalEnumeration;
use super::ValueEnumeration;
use crate::basic_types::DomainValue;
use crate::basic_types::Interval;

/// A set of values stored as sorted, disjoint, closed intervals.
///
/// Adjacent intervals are always separated by at least one missing value, i.e. every stored
/// interval is a maximal run. This keeps [`IntervalDomain::interval_count`] meaningful and makes
/// range containment a single binary search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntervalDomain<V> {
    intervals: Vec<Interval<V>>,
}

impl<V: DomainValue> IntervalDomain<V> {
    pub fn empty() -> Self {
        IntervalDomain {
            intervals: Vec::new(),
        }
    }

    /// The domain containing exactly the values of `[lo, hi]`.
    pub fn new(lo: V, hi: V) -> Self {
        IntervalDomain {
            intervals: vec![Interval::new(lo, hi)],
        }
    }

    /// The union of the given ranges; they may overlap and come in any order.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval<V>>) -> Self {
        let mut domain = Self::empty();
        for interval in intervals {
            domain.union_range_adapt(interval.lo(), interval.hi());
        }
        domain
    }

    pub fn as_slice(&self) -> &[Interval<V>] {
        &self.intervals
    }

    /// Index of the first interval with an upper bound of at least `value`.
    fn first_reaching(&self, value: &V) -> usize {
        self.intervals.partition_point(|interval| interval.hi() < value)
    }

    /// Index of the first interval with a lower bound strictly above `value`.
    fn first_beyond(&self, value: &V) -> usize {
        self.intervals.partition_point(|interval| interval.lo() <= value)
    }
}

impl<V: DomainValue> DomainRepresentation<V> for IntervalDomain<V> {
    fn empty_like(&self) -> Self {
        Self::empty()
    }

    fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    fn size(&self) -> usize {
        self.intervals
            .iter()
            .fold(0_usize, |size, interval| size.saturating_add(interval.size()))
    }

    fn min(&self) -> Option<&V> {
        self.intervals.first().map(Interval::lo)
    }

    fn max(&self) -> Option<&V> {
        self.intervals.last().map(Interval::hi)
    }

    fn contains_range(&self, lo: &V, hi: &V) -> bool {
        self.intervals
            .get(self.first_reaching(lo))
            .is_some_and(|interval| interval.lo() <= lo && hi <= interval.hi())
    }

    fn intersects_range(&self, lo: &V, hi: &V) -> bool {
        self.intervals
            .get(self.first_reaching(lo))
            .is_some_and(|interval| interval.lo() <= hi)
    }

    fn union_range_adapt(&mut self, lo: &V, hi: &V) {
        // Intervals which overlap or touch [lo, hi] are merged into one.
        let start = self.first_reaching(&lo.predecessor());
        let end = self.first_beyond(&hi.successor());

        let mut merged_lo = lo.clone();
        let mut merged_hi = hi.clone();
        if start < end {
            merged_lo = min(merged_lo, self.intervals[start].lo().clone());
            merged_hi = max(merged_hi, self.intervals[end - 1].hi().clone());
        }

        let _ = self
            .intervals
            .splice(start..end, [Interval::new(merged_lo, merged_hi)]);
    }

    fn subtract_range_adapt(&mut self, lo: &V, hi: &V) {
        let start = self.first_reaching(lo);
        let end = self.first_beyond(hi);
        if start >= end {
            return;
        }

        let mut remainder = Vec::with_capacity(2);
        let first = &self.intervals[start];
        if first.lo() < lo {
            remainder.push(Interval::new(first.lo().clone(), lo.predecessor()));
        }
        let last = &self.intervals[end - 1];
        if last.hi() > hi {
            remainder.push(Interval::new(hi.successor(), last.hi().clone()));
        }

        let _ = self.intervals.splice(start..end, remainder);
    }

    fn intersect_range(&self, lo: &V, hi: &V) -> Self {
        let start = self.first_reaching(lo);
        let end = self.first_beyond(hi);

        let intervals = self.intervals[start..end.max(start)]
            .iter()
            .map(|interval| {
                Interval::new(
                    max(interval.lo(), lo).clone(),
                    min(interval.hi(), hi).clone(),
                )
            })
            .collect();

        IntervalDomain { intervals }
    }

    fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    fn nth_interval(&self, index: usize) -> Option<Interval<V>> {
        self.intervals.get(index).cloned()
    }

    fn element_at(&self, index: usize) -> Option<V> {
        let mut remaining = index;
        for interval in &self.intervals {
            let size = interval.size();
            if remaining < size {
                return Some(interval.lo().offset_by(remaining));
            }
            remaining -= size;
        }
        None
    }

    fn next_value(&self, value: &V) -> Option<V> {
        let candidate = value.successor();
        self.intervals
            .get(self.first_reaching(&candidate))
            .map(|interval| max(interval.lo(), &candidate).clone())
    }

    fn previous_value(&self, value: &V) -> Option<V> {
        let candidate = value.predecessor();
        let index = self.first_beyond(&candidate);
        if index == 0 {
            return None;
        }

        Some(min(self.intervals[index - 1].hi(), &candidate).clone())
    }

    fn complement_within(&self, universe: &Interval<V>) -> Self {
        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        let mut cursor = universe.lo().clone();

        for interval in &self.intervals {
            if interval.hi() < &cursor {
                continue;
            }
            if interval.lo() > universe.hi() {
                break;
            }
            if interval.lo() > &cursor {
                gaps.push(Interval::new(cursor, interval.lo().predecessor()));
            }
            cursor = interval.hi().successor();
        }

        if &cursor <= universe.hi() {
            gaps.push(Interval::new(cursor, universe.hi().clone()));
        }

        IntervalDomain { intervals: gaps }
    }

    fn values(&self) -> ValueEnumeration<'_, V> {
        ValueEnumeration::over_intervals(&self.intervals)
    }

    fn intervals(&self) -> IntervalEnumeration<'_, V> {
        IntervalEnumeration::over_intervals(&self.intervals)
    }

    fn is_consistent(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|pair| &pair[0].hi().successor() < pair[1].lo())
    }
}
