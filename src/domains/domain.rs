use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;

use rand::Rng;

use super::enumeration::OperandRanges;
use super::DomainRepresentation;
use super::IntervalDomain;
use super::IntervalEnumeration;
use super::SparseDomain;
use super::ValueEnumeration;
use crate::basic_types::DomainValue;
use crate::basic_types::Interval;
use crate::munchkin_assert_simple;

/// The largest universe over which [`Domain::complement`] materialises a sparse complement.
pub const DEFAULT_SPARSE_COMPLEMENT_LIMIT: usize = 1 << 16;

/// The admissible values of a variable, in one of two representations.
///
/// All operations are defined on the set of values and are oblivious to the representation of
/// either operand. Operations combining two domains walk the other operand once, choosing the
/// value enumeration of a sparse operand and the interval enumeration of an interval operand, and
/// apply the receiver's range primitive to every step. The result of a pure operation has the
/// representation of the receiver.
#[derive(Clone, Debug)]
pub enum Domain<V> {
    Intervals(IntervalDomain<V>),
    Sparse(SparseDomain<V>),
}

macro_rules! on_representation {
    ($domain:expr, $representation:ident => $body:expr) => {
        match $domain {
            Domain::Intervals($representation) => $body,
            Domain::Sparse($representation) => $body,
        }
    };
}

macro_rules! map_representation {
    ($domain:expr, $representation:ident => $body:expr) => {
        match $domain {
            Domain::Intervals($representation) => Domain::Intervals($body),
            Domain::Sparse($representation) => Domain::Sparse($body),
        }
    };
}

impl<V: DomainValue> Domain<V> {
    /// The empty domain, in the interval representation.
    pub fn empty() -> Self {
        Domain::Intervals(IntervalDomain::empty())
    }

    /// The values of `[lo, hi]` in the interval representation.
    pub fn interval(lo: V, hi: V) -> Self {
        Domain::Intervals(IntervalDomain::new(lo, hi))
    }

    /// The union of the given ranges in the interval representation.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval<V>>) -> Self {
        Domain::Intervals(IntervalDomain::from_intervals(intervals))
    }

    /// The given values in the sparse representation.
    pub fn sparse(values: impl IntoIterator<Item = V>) -> Self {
        Domain::Sparse(SparseDomain::new(values))
    }

    /// The values of `[lo, hi]` in the sparse representation.
    pub fn sparse_range(lo: V, hi: V) -> Self {
        Domain::Sparse(SparseDomain::from_range(lo, hi))
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, Domain::Sparse(_))
    }

    /// An empty domain of the same representation as `self`.
    pub fn empty_like(&self) -> Self {
        map_representation!(self, representation => representation.empty_like())
    }

    pub fn is_empty(&self) -> bool {
        on_representation!(self, representation => representation.is_empty())
    }

    /// The number of values, saturating at [`usize::MAX`].
    pub fn size(&self) -> usize {
        on_representation!(self, representation => representation.size())
    }

    pub fn min(&self) -> Option<&V> {
        on_representation!(self, representation => representation.min())
    }

    pub fn max(&self) -> Option<&V> {
        on_representation!(self, representation => representation.max())
    }

    pub fn is_singleton(&self) -> bool {
        self.min().is_some() && self.min() == self.max()
    }

    /// The value of a singleton domain.
    pub fn value(&self) -> Option<&V> {
        if self.is_singleton() {
            self.min()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.contains_range(value, value)
    }

    pub fn contains_range(&self, lo: &V, hi: &V) -> bool {
        lo <= hi && on_representation!(self, representation => representation.contains_range(lo, hi))
    }

    /// Whether every value of `other` is in `self`.
    pub fn contains_domain(&self, other: &Domain<V>) -> bool {
        other
            .operand_ranges()
            .all(|range| self.contains_range(range.lo(), range.hi()))
    }

    pub fn intersects_range(&self, lo: &V, hi: &V) -> bool {
        lo <= hi
            && on_representation!(self, representation => representation.intersects_range(lo, hi))
    }

    pub fn intersects(&self, other: &Domain<V>) -> bool {
        if self.is_sparse() && !other.is_sparse() {
            return self.values().any(|value| other.contains(&value));
        }

        other
            .operand_ranges()
            .any(|range| self.intersects_range(range.lo(), range.hi()))
    }

    pub fn union_range(&self, lo: &V, hi: &V) -> Self {
        let mut result = self.clone();
        result.union_range_adapt(lo, hi);
        result
    }

    pub fn union_with(&self, other: &Domain<V>) -> Self {
        let mut result = self.clone();
        for range in other.operand_ranges() {
            result.union_range_adapt(range.lo(), range.hi());
        }
        result
    }

    pub fn subtract_range(&self, lo: &V, hi: &V) -> Self {
        let mut result = self.clone();
        result.subtract_range_adapt(lo, hi);
        result
    }

    pub fn subtract_value(&self, value: &V) -> Self {
        self.subtract_range(value, value)
    }

    pub fn subtract(&self, other: &Domain<V>) -> Self {
        let mut result = self.clone();
        for range in other.operand_ranges() {
            if result.is_empty() {
                break;
            }
            result.subtract_range_adapt(range.lo(), range.hi());
        }
        result
    }

    pub fn intersect_range(&self, lo: &V, hi: &V) -> Self {
        if lo > hi {
            return self.empty_like();
        }
        map_representation!(self, representation => representation.intersect_range(lo, hi))
    }

    pub fn intersect(&self, other: &Domain<V>) -> Self {
        if self.is_sparse() && !other.is_sparse() {
            return Domain::Sparse(SparseDomain::new(
                self.values().filter(|value| other.contains(value)),
            ));
        }

        let mut result = self.empty_like();
        for range in other.operand_ranges() {
            let overlap = self.intersect_range(range.lo(), range.hi());
            for piece in overlap.operand_ranges() {
                result.union_range_adapt(piece.lo(), piece.hi());
            }
        }
        result
    }

    /// Every value moved by `offset`, in the same representation. Values moved out of the
    /// representable universe are dropped.
    pub fn shifted(&self, offset: &V) -> Self {
        munchkin_assert_simple!(
            Interval::<V>::universe().contains(offset),
            "cannot shift by {offset}, which is outside the universe"
        );
        if offset.is_zero() {
            return self.clone();
        }

        let moved = match self {
            Domain::Intervals(representation) => {
                Domain::from_intervals(representation.intervals().map(|interval| {
                    let (lo, hi) = interval.into_bounds();
                    Interval::new(lo + offset.clone(), hi + offset.clone())
                }))
            }
            Domain::Sparse(representation) => {
                Domain::sparse(representation.values().map(|value| value + offset.clone()))
            }
        };

        let universe = Interval::<V>::universe();
        moved.intersect_range(universe.lo(), universe.hi())
    }

    pub fn size_of_intersection(&self, other: &Domain<V>) -> usize {
        self.intersect(other).size()
    }

    /// Set equality; cheap size comparison first, then containment in both directions.
    pub fn equals_domain(&self, other: &Domain<V>) -> bool {
        self.size() == other.size() && self.contains_domain(other) && other.contains_domain(self)
    }

    /// Lexicographic order of the ascending value sequences. A domain whose values are a proper
    /// prefix of the values of `other` orders first.
    pub fn lex_cmp(&self, other: &Domain<V>) -> Ordering {
        self.values().cmp(other.values())
    }

    /// The values of `universe` which are not in `self`, in the same representation.
    ///
    /// A sparse complement is only taken over universes of at most
    /// [`DEFAULT_SPARSE_COMPLEMENT_LIMIT`] values.
    pub fn complement(&self, universe: &Interval<V>) -> Self {
        self.complement_bounded(universe, DEFAULT_SPARSE_COMPLEMENT_LIMIT)
    }

    /// See [`Domain::complement`]; `sparse_limit` is the largest universe a sparse complement may
    /// be taken over.
    pub fn complement_bounded(&self, universe: &Interval<V>, sparse_limit: usize) -> Self {
        munchkin_assert_simple!(
            !self.is_sparse() || universe.size() <= sparse_limit,
            "the sparse complement over {universe} exceeds the limit of {sparse_limit} values"
        );
        map_representation!(self, representation => representation.complement_within(universe))
    }

    pub fn interval_count(&self) -> usize {
        on_representation!(self, representation => representation.interval_count())
    }

    pub fn nth_interval(&self, index: usize) -> Option<Interval<V>> {
        on_representation!(self, representation => representation.nth_interval(index))
    }

    pub fn element_at(&self, index: usize) -> Option<V> {
        on_representation!(self, representation => representation.element_at(index))
    }

    pub fn next_value(&self, value: &V) -> Option<V> {
        on_representation!(self, representation => representation.next_value(value))
    }

    pub fn previous_value(&self, value: &V) -> Option<V> {
        on_representation!(self, representation => representation.previous_value(value))
    }

    /// A uniformly drawn value of the domain, or `None` if it is empty.
    pub fn random_value<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<V> {
        if self.is_empty() {
            return None;
        }
        self.element_at(rng.gen_range(0..self.size()))
    }

    pub fn values(&self) -> ValueEnumeration<'_, V> {
        on_representation!(self, representation => representation.values())
    }

    pub fn intervals(&self) -> IntervalEnumeration<'_, V> {
        on_representation!(self, representation => representation.intervals())
    }

    pub(crate) fn is_consistent(&self) -> bool {
        on_representation!(self, representation => representation.is_consistent())
    }

    fn operand_ranges(&self) -> OperandRanges<'_, V> {
        match self {
            Domain::Intervals(representation) => {
                OperandRanges::Intervals(representation.intervals())
            }
            Domain::Sparse(representation) => OperandRanges::Values(representation.values()),
        }
    }

    fn union_range_adapt(&mut self, lo: &V, hi: &V) {
        on_representation!(self, representation => representation.union_range_adapt(lo, hi))
    }

    fn subtract_range_adapt(&mut self, lo: &V, hi: &V) {
        if lo <= hi {
            on_representation!(self, representation => representation.subtract_range_adapt(lo, hi))
        }
    }
}

impl<V: DomainValue> PartialEq for Domain<V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_domain(other)
    }
}

impl<V: DomainValue> Eq for Domain<V> {}

impl<V: DomainValue> Display for Domain<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, interval) in self.intervals().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "}}")
    }
}
