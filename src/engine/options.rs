use crate::basic_types::DomainValue;
use crate::domains::Domain;
use crate::domains::DEFAULT_SPARSE_COMPLEMENT_LIMIT;

/// Decides the representation of the domain a new variable starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepresentationPolicy {
    /// Every domain is stored as intervals.
    #[default]
    Intervals,
    /// Every domain is stored as an explicit set of values.
    Sparse,
    /// Initial ranges of at most this many values are stored sparsely, larger ones as intervals.
    SparseUpTo(usize),
}

impl RepresentationPolicy {
    pub(crate) fn initial_domain<V: DomainValue>(self, lo: V, hi: V) -> Domain<V> {
        match self {
            RepresentationPolicy::Intervals => Domain::interval(lo, hi),
            RepresentationPolicy::Sparse => Domain::sparse_range(lo, hi),
            RepresentationPolicy::SparseUpTo(limit) if V::count_between(&lo, &hi) <= limit => {
                Domain::sparse_range(lo, hi)
            }
            RepresentationPolicy::SparseUpTo(_) => Domain::interval(lo, hi),
        }
    }
}

/// Options for the [`crate::engine::DomainStore`] which determine how it represents domains.
#[derive(Clone, Copy, Debug)]
pub struct DomainStoreOptions {
    /// The representation of the domains of new variables.
    pub representation: RepresentationPolicy,
    /// The largest universe a sparse complement may be taken over.
    pub sparse_complement_limit: usize,
}

impl Default for DomainStoreOptions {
    fn default() -> Self {
        DomainStoreOptions {
            representation: RepresentationPolicy::default(),
            sparse_complement_limit: DEFAULT_SPARSE_COMPLEMENT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RepresentationPolicy;

    #[test]
    fn sparse_up_to_switches_on_the_range_size() {
        let policy = RepresentationPolicy::SparseUpTo(10);

        assert!(policy.initial_domain(1, 10).is_sparse());
        assert!(!policy.initial_domain(1, 11).is_sparse());
        assert!(!RepresentationPolicy::Intervals.initial_domain(1, 2).is_sparse());
        assert!(RepresentationPolicy::Sparse.initial_domain(1, 2).is_sparse());
    }
}
