//! Lazy enumerations over the contents of a domain.
//!
//! Both enumerations are finite, ascending, and single-pass: a new traversal requires a new
//! enumeration. They borrow the domain they were created from, so the domain cannot be narrowed
//! while an enumeration over it is alive.
use std::iter::FusedIterator;
use std::iter::Peekable;
use std::slice;

use crate::basic_types::DomainValue;
use crate::basic_types::Interval;

/// Enumerates the values of a domain in ascending order, one value per step.
#[derive(Debug)]
pub struct ValueEnumeration<'a, V> {
    source: ValueSource<'a, V>,
}

#[derive(Debug)]
enum ValueSource<'a, V> {
    Intervals {
        intervals: slice::Iter<'a, Interval<V>>,
        /// The next value to yield together with the upper bound of the interval it is in.
        current: Option<(V, V)>,
    },
    Values(slice::Iter<'a, V>),
}

impl<'a, V: DomainValue> ValueEnumeration<'a, V> {
    pub(crate) fn over_intervals(intervals: &'a [Interval<V>]) -> Self {
        ValueEnumeration {
            source: ValueSource::Intervals {
                intervals: intervals.iter(),
                current: None,
            },
        }
    }

    pub(crate) fn over_values(values: &'a [V]) -> Self {
        ValueEnumeration {
            source: ValueSource::Values(values.iter()),
        }
    }
}

impl<V: DomainValue> Iterator for ValueEnumeration<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        match &mut self.source {
            ValueSource::Values(values) => values.next().cloned(),
            ValueSource::Intervals { intervals, current } => loop {
                if let Some((next, hi)) = current.take() {
                    if next < hi {
                        *current = Some((next.successor(), hi));
                    }
                    return Some(next);
                }

                let interval = intervals.next()?;
                *current = Some((interval.lo().clone(), interval.hi().clone()));
            },
        }
    }
}

impl<V: DomainValue> FusedIterator for ValueEnumeration<'_, V> {}

/// Enumerates the maximal runs of consecutive values of a domain in ascending order.
#[derive(Debug)]
pub struct IntervalEnumeration<'a, V> {
    source: IntervalSource<'a, V>,
}

#[derive(Debug)]
enum IntervalSource<'a, V> {
    Intervals(slice::Iter<'a, Interval<V>>),
    Values(Peekable<slice::Iter<'a, V>>),
}

impl<'a, V: DomainValue> IntervalEnumeration<'a, V> {
    pub(crate) fn over_intervals(intervals: &'a [Interval<V>]) -> Self {
        IntervalEnumeration {
            source: IntervalSource::Intervals(intervals.iter()),
        }
    }

    pub(crate) fn over_values(values: &'a [V]) -> Self {
        IntervalEnumeration {
            source: IntervalSource::Values(values.iter().peekable()),
        }
    }
}

impl<V: DomainValue> Iterator for IntervalEnumeration<'_, V> {
    type Item = Interval<V>;

    fn next(&mut self) -> Option<Interval<V>> {
        match &mut self.source {
            IntervalSource::Intervals(intervals) => intervals.next().cloned(),
            IntervalSource::Values(values) => {
                let lo = values.next()?.clone();
                let mut hi = lo.clone();
                while let Some(value) = values.next_if(|value| **value == hi.successor()) {
                    hi = value.clone();
                }
                Some(Interval::new(lo, hi))
            }
        }
    }
}

impl<V: DomainValue> FusedIterator for IntervalEnumeration<'_, V> {}

/// The cheapest way to walk another domain in a domain-vs-domain operation: the value
/// enumeration of a sparse domain (each value as a one-value range), or the interval enumeration
/// of an interval domain.
#[derive(Debug)]
pub(crate) enum OperandRanges<'a, V> {
    Values(ValueEnumeration<'a, V>),
    Intervals(IntervalEnumeration<'a, V>),
}

impl<V: DomainValue> Iterator for OperandRanges<'_, V> {
    type Item = Interval<V>;

    fn next(&mut self) -> Option<Interval<V>> {
        match self {
            OperandRanges::Values(values) => values.next().map(Interval::singleton),
            OperandRanges::Intervals(intervals) => intervals.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IntervalEnumeration;
    use super::ValueEnumeration;
    use crate::basic_types::Interval;

    #[test]
    fn values_of_intervals_are_ascending() {
        let intervals = vec![Interval::new(1, 3), Interval::singleton(5), Interval::new(7, 8)];

        let values: Vec<i32> = ValueEnumeration::over_intervals(&intervals).collect();

        assert_eq!(values, vec![1, 2, 3, 5, 7, 8]);
    }

    #[test]
    fn sparse_values_are_grouped_into_maximal_runs() {
        let values = vec![-2, -1, 0, 4, 6, 7];

        let intervals: Vec<_> = IntervalEnumeration::over_values(&values).collect();

        assert_eq!(
            intervals,
            vec![Interval::new(-2, 0), Interval::singleton(4), Interval::new(6, 7)]
        );
    }

    #[test]
    fn enumeration_is_single_pass() {
        let values = vec![1, 2];
        let mut enumeration = ValueEnumeration::over_values(&values);

        assert_eq!(enumeration.by_ref().count(), 2);
        assert_eq!(enumeration.next(), None);
    }
}
